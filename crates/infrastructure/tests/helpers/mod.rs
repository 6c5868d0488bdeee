#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use relief_infrastructure::database::create_pool;
use sqlx::SqlitePool;

/// Fresh in-memory database with the full schema applied.
pub async fn create_test_db() -> SqlitePool {
    create_pool("sqlite::memory:", 1).await.unwrap()
}

pub fn instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}
