//! Configuration module for the Relief API
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding, auth and lookup radius
//! - `cache`: Cache-aside TTL and purge schedule
//! - `providers`: External enrichment endpoints and credentials
//! - `logging`: Logging settings
//! - `database`: Database configuration
//! - `errors`: Configuration errors

pub mod cache;
pub mod database;
pub mod errors;
pub mod logging;
pub mod providers;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use providers::ProvidersConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
