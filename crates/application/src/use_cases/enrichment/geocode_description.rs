use relief_domain::{CacheKey, Coordinates, DomainError, GeocodeResult, UNKNOWN_LOCATION};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::aggregate;
use crate::ports::{Geocoder, LocationExtractor};
use crate::services::CacheAsideResolver;

/// Two-stage pipeline: free text to place name, place name to coordinates.
///
/// Stage 1 is keyed on the raw description, stage 2 on the place name it
/// produced, so different descriptions naming the same place share one
/// geocoding entry. "No result" in either stage is a successful sentinel
/// (`Unknown`, zero coordinates); provider failures are not cached and surface
/// as `DomainError::EnrichmentFailed`.
pub struct GeocodeDescriptionUseCase {
    resolver: Arc<CacheAsideResolver>,
    extractor: Arc<dyn LocationExtractor>,
    geocoder: Arc<dyn Geocoder>,
}

impl GeocodeDescriptionUseCase {
    pub fn new(
        resolver: Arc<CacheAsideResolver>,
        extractor: Arc<dyn LocationExtractor>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self {
            resolver,
            extractor,
            geocoder,
        }
    }

    #[instrument(skip(self, description))]
    pub async fn execute(&self, description: &str) -> Result<GeocodeResult, DomainError> {
        if description.trim().is_empty() {
            return Err(DomainError::MissingField("description".to_string()));
        }

        let location_name = self.extract(description).await?;
        let coordinates = self.geocode(&location_name).await?;

        debug!(
            location_name = %location_name,
            lat = coordinates.lat,
            lon = coordinates.lon,
            "Description geocoded"
        );

        Ok(GeocodeResult {
            location_name,
            coordinates,
        })
    }

    async fn extract(&self, description: &str) -> Result<String, DomainError> {
        let key = CacheKey::location_extraction(description);
        let extractor = Arc::clone(&self.extractor);

        self.resolver
            .resolve(&key, || async move {
                let place = extractor.extract_location(description).await?;
                Ok::<_, DomainError>(
                    place
                        .map(|p| p.trim().to_string())
                        .filter(|p| !p.is_empty())
                        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
                )
            })
            .await
            .map_err(|e| aggregate("location extraction", e))
    }

    async fn geocode(&self, location_name: &str) -> Result<Coordinates, DomainError> {
        let key = CacheKey::geocoding(location_name);
        let geocoder = Arc::clone(&self.geocoder);

        self.resolver
            .resolve(&key, || async move {
                let found = geocoder.geocode(location_name).await?;
                Ok::<_, DomainError>(found.unwrap_or_else(Coordinates::zero))
            })
            .await
            .map_err(|e| aggregate("geocoding", e))
    }
}
