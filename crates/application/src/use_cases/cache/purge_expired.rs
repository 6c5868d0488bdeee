use relief_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{CacheStore, Clock};

/// Physically removes stale cache rows.
///
/// Purely a storage concern: the resolver already ignores expired rows, so
/// running this or not never changes what callers observe.
pub struct PurgeExpiredCacheUseCase {
    store: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
}

impl PurgeExpiredCacheUseCase {
    pub fn new(store: Arc<dyn CacheStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<u64, DomainError> {
        let purged = self.store.purge_expired(self.clock.now()).await?;

        if purged > 0 {
            info!(purged, "Expired cache entries purged");
        }

        Ok(purged)
    }
}
