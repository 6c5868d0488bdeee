use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// When set, mutating requests must carry a matching `x-api-key` header
    pub api_key: Option<String>,

    /// Radius used by the nearby-resources lookup, in metres (default: 10000)
    #[serde(default = "default_nearby_radius")]
    pub nearby_radius_meters: f64,
}

fn default_port() -> u16 {
    3000
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_nearby_radius() -> f64 {
    crate::resource::DEFAULT_NEARBY_RADIUS_METERS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_bind_address(),
            cors_allowed_origins: default_cors_origins(),
            api_key: None,
            nearby_radius_meters: default_nearby_radius(),
        }
    }
}
