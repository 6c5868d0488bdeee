use crate::CachePurgeJob;
use std::sync::Arc;
use tracing::info;

/// Registers background jobs and starts them together.
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_cache_purge(CachePurgeJob::new(purge).with_interval(3600))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    cache_purge: Option<CachePurgeJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self { cache_purge: None }
    }

    pub fn with_cache_purge(mut self, job: CachePurgeJob) -> Self {
        self.cache_purge = Some(job);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.cache_purge {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
