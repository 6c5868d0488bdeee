use relief_domain::config::cache::DEFAULT_CACHE_TTL_SECS;
use relief_domain::{CacheEntry, CacheKey, DomainError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::ports::{CacheStore, Clock, SystemClock};

/// Cache-aside resolver shared by every enrichment use case.
///
/// For a given key it returns the stored value while the entry is fresh and
/// otherwise runs the producer, writes the result through with `now + ttl`
/// and returns it. One read per call, at most one write, never a delete.
///
/// Concurrent misses on the same key are not coalesced: each caller runs its
/// own producer and the last upsert wins.
pub struct CacheAsideResolver {
    store: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    ttl: chrono::Duration,
}

impl CacheAsideResolver {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), ttl)
    }

    pub fn with_clock(store: Arc<dyn CacheStore>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        let ttl = chrono::Duration::from_std(ttl)
            .unwrap_or_else(|_| chrono::Duration::seconds(DEFAULT_CACHE_TTL_SECS as i64));
        Self { store, clock, ttl }
    }

    /// Returns the cached value for `key`, or computes, stores and returns it.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidCacheKey` - If `key` is empty; the store is not touched
    /// * Any error returned by `producer`, unchanged; nothing is written
    ///
    /// Store read failures are treated as a miss and store write failures are
    /// logged; neither fails the call.
    #[instrument(skip(self, producer), fields(key = %key))]
    pub async fn resolve<T, F, Fut>(&self, key: &CacheKey, producer: F) -> Result<T, DomainError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        if key.as_str().is_empty() {
            return Err(DomainError::InvalidCacheKey(
                "cache key cannot be empty".to_string(),
            ));
        }

        if let Some(value) = self.lookup(key).await {
            return Ok(value);
        }

        debug!("Cache MISS");
        let value = producer().await?;

        match self.clock.now().checked_add_signed(self.ttl) {
            Some(expires_at) => self.write_through(key, &value, expires_at).await,
            None => warn!(ttl = %self.ttl, "Expiry out of range, skipping cache write"),
        }

        Ok(value)
    }

    async fn lookup<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let entry = match self.store.get(key.as_str()).await {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        let now = self.clock.now();
        if !entry.is_fresh_at(now) {
            debug!(expires_at = %entry.expires_at, "Cache entry expired");
            return None;
        }

        match serde_json::from_value(entry.value) {
            Ok(value) => {
                debug!(expires_at = %entry.expires_at, "Cache HIT");
                Some(value)
            }
            Err(e) => {
                warn!(error = %e, "Cached value has an unexpected shape, recomputing");
                None
            }
        }
    }

    async fn write_through<T: Serialize>(
        &self,
        key: &CacheKey,
        value: &T,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Fresh value is not serializable, skipping cache write");
                return;
            }
        };

        let entry = CacheEntry::new(key.as_str(), json, expires_at);
        if let Err(e) = self.store.upsert(entry).await {
            warn!(error = %e, "Cache write failed, returning fresh value anyway");
        }
    }
}
