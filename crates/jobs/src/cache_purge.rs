use relief_application::use_cases::PurgeExpiredCacheUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically deletes expired rows from the cache table.
pub struct CachePurgeJob {
    purge: Arc<PurgeExpiredCacheUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CachePurgeJob {
    pub fn new(purge: Arc<PurgeExpiredCacheUseCase>) -> Self {
        Self {
            purge,
            interval_secs: 3600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting cache purge job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CachePurgeJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = self.purge.execute().await {
                            error!(error = %e, "Cache purge failed");
                        }
                    }
                }
            }
        });
    }
}
