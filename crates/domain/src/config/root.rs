use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    CacheConfig, ConfigError, DatabaseConfig, LoggingConfig, ProvidersConfig, ServerConfig,
};
use super::cache::MAX_CACHE_TTL_SECS;
use crate::validators::validate_url;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "relief.toml";

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GOOGLE_MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// Values passed on the command line; they win over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub cache_ttl_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from `path` (or `relief.toml` when present), then
    /// fills provider keys from the environment and applies CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_env(
            std::env::var(GEMINI_API_KEY_ENV).ok(),
            std::env::var(GOOGLE_MAPS_API_KEY_ENV).ok(),
        );
        config.apply_overrides(overrides);

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Environment keys only fill gaps; a key in the file is kept.
    pub fn apply_env(&mut self, gemini_api_key: Option<String>, google_maps_api_key: Option<String>) {
        if self.providers.gemini_api_key.is_none() {
            self.providers.gemini_api_key = gemini_api_key.filter(|k| !k.is_empty());
        }
        if self.providers.google_maps_api_key.is_none() {
            self.providers.google_maps_api_key = google_maps_api_key.filter(|k| !k.is_empty());
        }
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(ttl) = overrides.cache_ttl_secs {
            self.cache.ttl_secs = ttl;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.ttl_secs must be greater than zero".to_string(),
            ));
        }
        if self.cache.ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::Validation(format!(
                "cache.ttl_secs cannot exceed {MAX_CACHE_TTL_SECS}"
            )));
        }
        if self.providers.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "providers.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if !(self.server.nearby_radius_meters > 0.0) {
            return Err(ConfigError::Validation(
                "server.nearby_radius_meters must be positive".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be greater than zero".to_string(),
            ));
        }

        for (name, url) in [
            ("providers.gemini_base_url", &self.providers.gemini_base_url),
            ("providers.google_geocode_url", &self.providers.google_geocode_url),
            ("providers.official_updates_url", &self.providers.official_updates_url),
        ] {
            validate_url(url).map_err(|e| ConfigError::Validation(format!("{name}: {e}")))?;
        }

        match self.logging.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "logging.level '{other}' is not one of trace, debug, info, warn, error"
            ))),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
