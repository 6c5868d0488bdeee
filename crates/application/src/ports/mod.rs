mod cache_store;
mod clock;
mod disaster_repository;
mod enrichment;
mod resource_repository;

pub use cache_store::CacheStore;
pub use clock::{Clock, SystemClock};
pub use disaster_repository::DisasterRepository;
pub use enrichment::{
    Geocoder, ImageVerifier, LocationExtractor, OfficialUpdatesSource, SocialMediaSource,
};
pub use resource_repository::ResourceRepository;
