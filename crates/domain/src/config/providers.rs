use serde::{Deserialize, Serialize};
use std::time::Duration;

/// External enrichment providers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// Base URL of the generative language API
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,

    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Falls back to the `GEMINI_API_KEY` environment variable
    #[serde(default, skip_serializing)]
    pub gemini_api_key: Option<String>,

    #[serde(default = "default_google_geocode_url")]
    pub google_geocode_url: String,

    /// Falls back to the `GOOGLE_MAPS_API_KEY` environment variable
    #[serde(default, skip_serializing)]
    pub google_maps_api_key: Option<String>,

    /// Page whose `<h2>` headings are served as official updates
    #[serde(default = "default_official_updates_url")]
    pub official_updates_url: String,

    /// Timeout applied to every outbound provider request (default: 10)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ProvidersConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            gemini_base_url: default_gemini_base_url(),
            gemini_model: default_gemini_model(),
            gemini_api_key: None,
            google_geocode_url: default_google_geocode_url(),
            google_maps_api_key: None,
            official_updates_url: default_official_updates_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_google_geocode_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

fn default_official_updates_url() -> String {
    "https://www.redcross.org".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}
