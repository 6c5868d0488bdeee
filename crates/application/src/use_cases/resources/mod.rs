mod get_nearby_resources;

pub use get_nearby_resources::GetNearbyResourcesUseCase;
