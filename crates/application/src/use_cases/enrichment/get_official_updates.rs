use relief_domain::{CacheKey, DomainError};
use std::sync::Arc;
use tracing::instrument;

use super::aggregate;
use crate::ports::OfficialUpdatesSource;
use crate::services::CacheAsideResolver;

/// Scraped headlines from the official relief page, cached per disaster.
pub struct GetOfficialUpdatesUseCase {
    resolver: Arc<CacheAsideResolver>,
    source: Arc<dyn OfficialUpdatesSource>,
}

impl GetOfficialUpdatesUseCase {
    pub fn new(resolver: Arc<CacheAsideResolver>, source: Arc<dyn OfficialUpdatesSource>) -> Self {
        Self { resolver, source }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, disaster_id: &str) -> Result<Vec<String>, DomainError> {
        let key = CacheKey::official_updates(disaster_id);
        let source = Arc::clone(&self.source);

        self.resolver
            .resolve(&key, || async move { source.fetch_updates(disaster_id).await })
            .await
            .map_err(|e| aggregate("official updates", e))
    }
}
