use relief_api::AppState;
use relief_application::ports::{Clock, SystemClock};
use relief_application::services::CacheAsideResolver;
use relief_application::use_cases::{
    CreateDisasterUseCase, DeleteDisasterUseCase, GeocodeDescriptionUseCase,
    GetDisastersUseCase, GetNearbyResourcesUseCase, GetOfficialUpdatesUseCase,
    GetSocialMediaUseCase, PurgeExpiredCacheUseCase, UpdateDisasterUseCase, VerifyImageUseCase,
};
use relief_domain::Config;
use std::sync::Arc;

use super::{Providers, Repositories};

pub struct UseCases {
    pub create_disaster: Arc<CreateDisasterUseCase>,
    pub get_disasters: Arc<GetDisastersUseCase>,
    pub update_disaster: Arc<UpdateDisasterUseCase>,
    pub delete_disaster: Arc<DeleteDisasterUseCase>,
    pub geocode: Arc<GeocodeDescriptionUseCase>,
    pub social_media: Arc<GetSocialMediaUseCase>,
    pub official_updates: Arc<GetOfficialUpdatesUseCase>,
    pub verify_image: Arc<VerifyImageUseCase>,
    pub nearby_resources: Arc<GetNearbyResourcesUseCase>,
    pub purge_cache: Arc<PurgeExpiredCacheUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, providers: &Providers, config: &Config) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let resolver = Arc::new(CacheAsideResolver::with_clock(
            repos.cache.clone(),
            clock.clone(),
            config.cache.ttl(),
        ));

        Self {
            create_disaster: Arc::new(CreateDisasterUseCase::new(
                repos.disasters.clone(),
                repos.resources.clone(),
                clock.clone(),
            )),
            get_disasters: Arc::new(GetDisastersUseCase::new(repos.disasters.clone())),
            update_disaster: Arc::new(UpdateDisasterUseCase::new(
                repos.disasters.clone(),
                clock.clone(),
            )),
            delete_disaster: Arc::new(DeleteDisasterUseCase::new(repos.disasters.clone())),
            geocode: Arc::new(GeocodeDescriptionUseCase::new(
                resolver.clone(),
                providers.extractor.clone(),
                providers.geocoder.clone(),
            )),
            social_media: Arc::new(GetSocialMediaUseCase::new(
                resolver.clone(),
                providers.social_media.clone(),
            )),
            official_updates: Arc::new(GetOfficialUpdatesUseCase::new(
                resolver.clone(),
                providers.official_updates.clone(),
            )),
            verify_image: Arc::new(VerifyImageUseCase::new(
                resolver,
                providers.image_verifier.clone(),
            )),
            nearby_resources: Arc::new(GetNearbyResourcesUseCase::new(
                repos.resources.clone(),
                config.server.nearby_radius_meters,
            )),
            purge_cache: Arc::new(PurgeExpiredCacheUseCase::new(repos.cache.clone(), clock)),
        }
    }

    pub fn app_state(&self, config: &Config) -> AppState {
        AppState {
            create_disaster: self.create_disaster.clone(),
            get_disasters: self.get_disasters.clone(),
            update_disaster: self.update_disaster.clone(),
            delete_disaster: self.delete_disaster.clone(),
            geocode: self.geocode.clone(),
            social_media: self.social_media.clone(),
            official_updates: self.official_updates.clone(),
            verify_image: self.verify_image.clone(),
            nearby_resources: self.nearby_resources.clone(),
            api_key: config
                .server
                .api_key
                .as_deref()
                .filter(|k| !k.is_empty())
                .map(Arc::from),
        }
    }
}
