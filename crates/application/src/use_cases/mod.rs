pub mod cache;
pub mod disasters;
pub mod enrichment;
pub mod resources;

// Re-export use cases
pub use cache::PurgeExpiredCacheUseCase;
pub use disasters::{
    CreateDisasterUseCase, DeleteDisasterUseCase, GetDisastersUseCase, UpdateDisasterUseCase,
};
pub use enrichment::{
    GeocodeDescriptionUseCase, GetOfficialUpdatesUseCase, GetSocialMediaUseCase,
    VerifyImageUseCase,
};
pub use resources::GetNearbyResourcesUseCase;
