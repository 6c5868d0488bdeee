use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use relief_application::ports::{CacheStore, Clock, DisasterRepository, ResourceRepository};
use relief_domain::{
    CacheEntry, Disaster, DomainError, NearbyQuery, NewResource, Resource,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Fixed clock
// ============================================================================

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// 2026-03-01 12:00:00 UTC
    pub fn default_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(Self::default_instant())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ============================================================================
// Mock CacheStore
// ============================================================================

#[derive(Default)]
pub struct MockCacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
    get_calls: AtomicU64,
    upsert_calls: AtomicU64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, entry: CacheEntry) {
        self.entries.write().await.insert(entry.key.clone(), entry);
    }

    pub async fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn get_calls(&self) -> u64 {
        self.get_calls.load(Ordering::Relaxed)
    }

    pub fn upsert_calls(&self) -> u64 {
        self.upsert_calls.load(Ordering::Relaxed)
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, DomainError> {
        self.get_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(DomainError::CacheRead("mock read failure".to_string()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn upsert(&self, entry: CacheEntry) -> Result<(), DomainError> {
        self.upsert_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(DomainError::CacheWrite("mock write failure".to_string()));
        }
        self.entries.write().await.insert(entry.key.clone(), entry);
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.is_fresh_at(now));
        Ok((before - entries.len()) as u64)
    }
}

// ============================================================================
// Mock DisasterRepository
// ============================================================================

#[derive(Default)]
pub struct MockDisasterRepository {
    disasters: RwLock<Vec<Disaster>>,
    next_id: AtomicI64,
    should_fail: AtomicBool,
}

impl MockDisasterRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Default::default()
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub async fn count(&self) -> usize {
        self.disasters.read().await.len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("mock database failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DisasterRepository for MockDisasterRepository {
    async fn create(&self, mut disaster: Disaster) -> Result<Disaster, DomainError> {
        self.check()?;
        disaster.id = Some(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.disasters.write().await.push(disaster.clone());
        Ok(disaster)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Disaster>, DomainError> {
        self.check()?;
        Ok(self
            .disasters
            .read()
            .await
            .iter()
            .find(|d| d.id == Some(id))
            .cloned())
    }

    async fn list(&self, tag: Option<&str>) -> Result<Vec<Disaster>, DomainError> {
        self.check()?;
        let disasters = self.disasters.read().await;
        Ok(disasters
            .iter()
            .rev()
            .filter(|d| tag.map_or(true, |t| d.has_tag(t)))
            .cloned()
            .collect())
    }

    async fn update(&self, disaster: Disaster) -> Result<Disaster, DomainError> {
        self.check()?;
        let id = disaster.id.unwrap_or_default();
        let mut disasters = self.disasters.write().await;
        let slot = disasters
            .iter_mut()
            .find(|d| d.id == disaster.id)
            .ok_or(DomainError::DisasterNotFound(id))?;
        *slot = disaster.clone();
        Ok(disaster)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.check()?;
        let mut disasters = self.disasters.write().await;
        let before = disasters.len();
        disasters.retain(|d| d.id != Some(id));
        if disasters.len() == before {
            return Err(DomainError::DisasterNotFound(id));
        }
        Ok(())
    }
}

// ============================================================================
// Mock ResourceRepository
// ============================================================================

#[derive(Default)]
pub struct MockResourceRepository {
    resources: RwLock<Vec<Resource>>,
    should_fail: AtomicBool,
}

impl MockResourceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub async fn all(&self) -> Vec<Resource> {
        self.resources.read().await.clone()
    }
}

#[async_trait]
impl ResourceRepository for MockResourceRepository {
    async fn create(&self, resource: NewResource) -> Result<Resource, DomainError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("mock database failure".to_string()));
        }
        let mut resources = self.resources.write().await;
        let stored = Resource {
            id: Some(resources.len() as i64 + 1),
            disaster_id: resource.disaster_id,
            name: Arc::from(resource.name.as_str()),
            location_name: resource.location_name.as_deref().map(Arc::from),
            resource_type: Arc::from(resource.resource_type.as_str()),
            coordinates: resource.coordinates,
            created_at: Utc::now(),
        };
        resources.push(stored.clone());
        Ok(stored)
    }

    async fn find_nearby(&self, query: NearbyQuery) -> Result<Vec<Resource>, DomainError> {
        Ok(self
            .resources
            .read()
            .await
            .iter()
            .filter(|r| query.contains(&r.coordinates))
            .cloned()
            .collect())
    }
}
