//! Enrichment use cases. Each one wraps exactly one external lookup per
//! stage in the cache-aside resolver, keyed by the namespace convention in
//! [`relief_domain::CacheKey`].

mod geocode_description;
mod get_official_updates;
mod get_social_media;
mod verify_image;

pub use geocode_description::GeocodeDescriptionUseCase;
pub use get_official_updates::GetOfficialUpdatesUseCase;
pub use get_social_media::GetSocialMediaUseCase;
pub use verify_image::VerifyImageUseCase;

use relief_domain::DomainError;

/// Collapses provider failures into one aggregate error. Caller mistakes pass through.
pub(crate) fn aggregate(stage: &str, err: DomainError) -> DomainError {
    if err.is_client_error() {
        return err;
    }
    DomainError::EnrichmentFailed(format!("{stage}: {err}"))
}
