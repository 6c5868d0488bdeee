use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relief_domain::{CacheEntry, DomainError};

/// Persistent key-value store backing the cache-aside resolver.
///
/// The store is deliberately dumb: `get` returns whatever row exists for the
/// key, expired or not, and freshness is decided by the caller. `upsert` must
/// leave at most one row per key.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the entry stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// * `DomainError::CacheRead` - If the backend could not be queried
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, DomainError>;

    /// Inserts the entry or replaces the existing entry with the same key.
    ///
    /// # Errors
    ///
    /// * `DomainError::CacheWrite` - If the backend rejected the write
    async fn upsert(&self, entry: CacheEntry) -> Result<(), DomainError>;

    /// Physically removes every entry whose expiry is at or before `now`.
    /// Returns the number of removed rows.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;
}
