use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relief_application::ports::CacheStore;
use relief_domain::{CacheEntry, DomainError};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type CacheRow = (String, String, i64);

/// `cache` table: one row per key, value as JSON text, expiry as epoch millis.
pub struct SqliteCacheStore {
    pool: SqlitePool,
}

impl SqliteCacheStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: CacheRow) -> Result<CacheEntry, DomainError> {
        let (key, value, expires_at_ms) = row;

        let value = serde_json::from_str(&value).map_err(|e| {
            DomainError::CacheRead(format!("Stored value for '{}' is not valid JSON: {}", key, e))
        })?;
        let expires_at = DateTime::<Utc>::from_timestamp_millis(expires_at_ms).ok_or_else(|| {
            DomainError::CacheRead(format!(
                "Stored expiry for '{}' is out of range: {}",
                key, expires_at_ms
            ))
        })?;

        Ok(CacheEntry {
            key,
            value,
            expires_at,
        })
    }
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, DomainError> {
        let row = sqlx::query_as::<_, CacheRow>(
            "SELECT key, value, expires_at FROM cache WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to read cache entry");
            DomainError::CacheRead(e.to_string())
        })?;

        row.map(Self::row_to_entry).transpose()
    }

    #[instrument(skip(self, entry), fields(key = %entry.key))]
    async fn upsert(&self, entry: CacheEntry) -> Result<(), DomainError> {
        let value = serde_json::to_string(&entry.value)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;

        sqlx::query(
            "INSERT INTO cache (key, value, expires_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                expires_at = excluded.expires_at",
        )
        .bind(&entry.key)
        .bind(&value)
        .bind(entry.expires_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to write cache entry");
            DomainError::CacheWrite(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM cache WHERE expires_at <= ?")
            .bind(now.timestamp_millis())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to purge expired cache entries");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
