#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use relief_application::ports::CacheStore;
use relief_domain::{CacheEntry, DomainError};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MockCacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
    purge_calls: AtomicU64,
    fail_purge: AtomicBool,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry that expired an hour ago and one valid for another hour.
    pub async fn with_stale_and_fresh() -> Self {
        let store = Self::new();
        let now = Utc::now();
        store
            .insert(CacheEntry::new("social_1", json!([]), now - Duration::hours(1)))
            .await;
        store
            .insert(CacheEntry::new("social_2", json!([]), now + Duration::hours(1)))
            .await;
        store
    }

    pub async fn insert(&self, entry: CacheEntry) {
        self.entries.write().await.insert(entry.key.clone(), entry);
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn purge_calls(&self) -> u64 {
        self.purge_calls.load(Ordering::Relaxed)
    }

    pub fn set_fail_purge(&self, fail: bool) {
        self.fail_purge.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, DomainError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn upsert(&self, entry: CacheEntry) -> Result<(), DomainError> {
        self.insert(entry).await;
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        self.purge_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_purge.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("mock purge failure".to_string()));
        }
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.is_fresh_at(now));
        Ok((before - entries.len()) as u64)
    }
}
