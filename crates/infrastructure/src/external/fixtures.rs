use async_trait::async_trait;
use relief_application::ports::{ImageVerifier, SocialMediaSource};
use relief_domain::{DomainError, ImageVerification, SocialMediaPost};

/// Canned social feed served until a real provider is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSocialMediaSource;

#[async_trait]
impl SocialMediaSource for FixtureSocialMediaSource {
    async fn fetch_posts(&self, _disaster_id: &str) -> Result<Vec<SocialMediaPost>, DomainError> {
        Ok(vec![
            SocialMediaPost::new("#floodrelief Need food in NYC", "citizen1"),
            SocialMediaPost::new("Trapped in subway!", "citizen2"),
        ])
    }
}

/// Accepts every image; no analysis is performed.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticImageVerifier;

#[async_trait]
impl ImageVerifier for StaticImageVerifier {
    async fn verify(&self, _image_url: &str) -> Result<ImageVerification, DomainError> {
        Ok(ImageVerification {
            verified: true,
            message: "No manipulation detected".to_string(),
        })
    }
}
