use relief_application::ports::{CacheStore, DisasterRepository, ResourceRepository};
use relief_infrastructure::repositories::{
    SqliteCacheStore, SqliteDisasterRepository, SqliteResourceRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub cache: Arc<dyn CacheStore>,
    pub disasters: Arc<dyn DisasterRepository>,
    pub resources: Arc<dyn ResourceRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            cache: Arc::new(SqliteCacheStore::new(pool.clone())),
            disasters: Arc::new(SqliteDisasterRepository::new(pool.clone())),
            resources: Arc::new(SqliteResourceRepository::new(pool)),
        }
    }
}
