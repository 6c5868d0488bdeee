use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
/// One year
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 3600;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Lifetime of an enrichment result (default: 3600)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Interval of the stale-row purge job; 0 disables it (default: 3600)
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn purge_enabled(&self) -> bool {
        self.purge_interval_secs > 0
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            purge_interval_secs: default_purge_interval_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

fn default_purge_interval_secs() -> u64 {
    3600
}
