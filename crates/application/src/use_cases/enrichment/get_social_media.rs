use relief_domain::{CacheKey, DomainError, SocialMediaPost};
use std::sync::Arc;
use tracing::instrument;

use super::aggregate;
use crate::ports::SocialMediaSource;
use crate::services::CacheAsideResolver;

pub struct GetSocialMediaUseCase {
    resolver: Arc<CacheAsideResolver>,
    source: Arc<dyn SocialMediaSource>,
}

impl GetSocialMediaUseCase {
    pub fn new(resolver: Arc<CacheAsideResolver>, source: Arc<dyn SocialMediaSource>) -> Self {
        Self { resolver, source }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, disaster_id: &str) -> Result<Vec<SocialMediaPost>, DomainError> {
        let key = CacheKey::social_media(disaster_id);
        let source = Arc::clone(&self.source);

        self.resolver
            .resolve(&key, || async move { source.fetch_posts(disaster_id).await })
            .await
            .map_err(|e| aggregate("social media", e))
    }
}
