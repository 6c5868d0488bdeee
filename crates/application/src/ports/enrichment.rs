//! Opaque third-party lookups. Every call here is expensive, rate limited or
//! non-deterministic, which is why use cases only reach them through the
//! cache-aside resolver.

use async_trait::async_trait;
use relief_domain::{Coordinates, DomainError, ImageVerification, SocialMediaPost};

#[async_trait]
pub trait LocationExtractor: Send + Sync {
    /// Extracts a place name from free text.
    ///
    /// Returns `Ok(None)` when the provider answered but produced no usable
    /// text; transport and parsing failures are errors.
    async fn extract_location(&self, description: &str) -> Result<Option<String>, DomainError>;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns `Ok(None)` when the provider has no match for `place_name`.
    async fn geocode(&self, place_name: &str) -> Result<Option<Coordinates>, DomainError>;
}

#[async_trait]
pub trait OfficialUpdatesSource: Send + Sync {
    async fn fetch_updates(&self, disaster_id: &str) -> Result<Vec<String>, DomainError>;
}

#[async_trait]
pub trait SocialMediaSource: Send + Sync {
    async fn fetch_posts(&self, disaster_id: &str) -> Result<Vec<SocialMediaPost>, DomainError>;
}

#[async_trait]
pub trait ImageVerifier: Send + Sync {
    async fn verify(&self, image_url: &str) -> Result<ImageVerification, DomainError>;
}
