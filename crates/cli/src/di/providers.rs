use relief_application::ports::{
    Geocoder, ImageVerifier, LocationExtractor, OfficialUpdatesSource, SocialMediaSource,
};
use relief_domain::config::ProvidersConfig;
use relief_infrastructure::external::{
    build_http_client, FixtureSocialMediaSource, GeminiLocationExtractor, GoogleGeocoder,
    ScrapedOfficialUpdates, StaticImageVerifier,
};
use std::sync::Arc;
use tracing::{info, warn};

/// External lookups behind the enrichment ports, sharing one HTTP client.
pub struct Providers {
    pub extractor: Arc<dyn LocationExtractor>,
    pub geocoder: Arc<dyn Geocoder>,
    pub official_updates: Arc<dyn OfficialUpdatesSource>,
    pub social_media: Arc<dyn SocialMediaSource>,
    pub image_verifier: Arc<dyn ImageVerifier>,
}

impl Providers {
    pub fn new(cfg: &ProvidersConfig) -> anyhow::Result<Self> {
        let client = build_http_client(cfg.request_timeout())?;

        if cfg.gemini_api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; geocoding requests will fail");
        }
        if cfg.google_maps_api_key.is_none() {
            warn!("GOOGLE_MAPS_API_KEY is not set; geocoding requests will fail");
        }

        let providers = Self {
            extractor: Arc::new(GeminiLocationExtractor::new(
                client.clone(),
                &cfg.gemini_base_url,
                &cfg.gemini_model,
                cfg.gemini_api_key.clone(),
            )),
            geocoder: Arc::new(GoogleGeocoder::new(
                client.clone(),
                &cfg.google_geocode_url,
                cfg.google_maps_api_key.clone(),
            )),
            official_updates: Arc::new(ScrapedOfficialUpdates::new(
                client,
                &cfg.official_updates_url,
            )?),
            social_media: Arc::new(FixtureSocialMediaSource),
            image_verifier: Arc::new(StaticImageVerifier),
        };

        info!(
            model = %cfg.gemini_model,
            timeout_secs = cfg.request_timeout_secs,
            "Enrichment providers configured"
        );

        Ok(providers)
    }
}
