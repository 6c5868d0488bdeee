use relief_domain::{CacheKey, DomainError, ImageVerification};
use std::sync::Arc;
use tracing::instrument;

use super::aggregate;
use crate::ports::ImageVerifier;
use crate::services::CacheAsideResolver;

pub struct VerifyImageUseCase {
    resolver: Arc<CacheAsideResolver>,
    verifier: Arc<dyn ImageVerifier>,
}

impl VerifyImageUseCase {
    pub fn new(resolver: Arc<CacheAsideResolver>, verifier: Arc<dyn ImageVerifier>) -> Self {
        Self { resolver, verifier }
    }

    /// Verification is keyed on the image reference only, so the same image
    /// attached to two disasters is checked once per TTL window.
    #[instrument(skip(self))]
    pub async fn execute(&self, image_url: &str) -> Result<ImageVerification, DomainError> {
        if image_url.trim().is_empty() {
            return Err(DomainError::MissingField("image_url".to_string()));
        }

        let key = CacheKey::image_verification(image_url);
        let verifier = Arc::clone(&self.verifier);

        self.resolver
            .resolve(&key, || async move { verifier.verify(image_url).await })
            .await
            .map_err(|e| aggregate("image verification", e))
    }
}
