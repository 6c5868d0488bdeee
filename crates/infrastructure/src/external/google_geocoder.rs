use async_trait::async_trait;
use relief_application::ports::Geocoder;
use relief_domain::{Coordinates, DomainError};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::http_client::send_checked;

const SERVICE: &str = "google-geocoding";

/// Forward geocoding against the Google Maps Geocoding API.
///
/// An answer without results (`ZERO_RESULTS`) is `Ok(None)`, not an error.
pub struct GoogleGeocoder {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl GoogleGeocoder {
    pub fn new(client: reqwest::Client, url: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            url: url.to_string(),
            api_key,
        }
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeHit>,
}

#[derive(Deserialize)]
struct GeocodeHit {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, place_name: &str) -> Result<Option<Coordinates>, DomainError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DomainError::ExternalService("Google Maps API key is not configured".to_string())
        })?;

        let response = send_checked(
            SERVICE,
            self.client
                .get(&self.url)
                .query(&[("address", place_name), ("key", api_key)]),
        )
        .await?;

        let parsed: GeocodeResponse =
            response
                .json()
                .await
                .map_err(|e| DomainError::InvalidResponse {
                    service: SERVICE.to_string(),
                    message: e.to_string(),
                })?;

        let found = parsed
            .results
            .into_iter()
            .next()
            .map(|hit| Coordinates::new(hit.geometry.location.lat, hit.geometry.location.lng));

        debug!(found = ?found, "Geocoding answered");
        Ok(found)
    }
}
