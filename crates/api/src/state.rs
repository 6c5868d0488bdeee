use relief_application::use_cases::{
    CreateDisasterUseCase, DeleteDisasterUseCase, GeocodeDescriptionUseCase,
    GetDisastersUseCase, GetNearbyResourcesUseCase, GetOfficialUpdatesUseCase,
    GetSocialMediaUseCase, UpdateDisasterUseCase, VerifyImageUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_disaster: Arc<CreateDisasterUseCase>,
    pub get_disasters: Arc<GetDisastersUseCase>,
    pub update_disaster: Arc<UpdateDisasterUseCase>,
    pub delete_disaster: Arc<DeleteDisasterUseCase>,
    pub geocode: Arc<GeocodeDescriptionUseCase>,
    pub social_media: Arc<GetSocialMediaUseCase>,
    pub official_updates: Arc<GetOfficialUpdatesUseCase>,
    pub verify_image: Arc<VerifyImageUseCase>,
    pub nearby_resources: Arc<GetNearbyResourcesUseCase>,
    /// When set, mutating requests must carry a matching `x-api-key` header
    pub api_key: Option<Arc<str>>,
}
