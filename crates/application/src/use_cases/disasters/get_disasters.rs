use relief_domain::{Disaster, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DisasterRepository;

pub struct GetDisastersUseCase {
    disaster_repo: Arc<dyn DisasterRepository>,
}

impl GetDisastersUseCase {
    pub fn new(disaster_repo: Arc<dyn DisasterRepository>) -> Self {
        Self { disaster_repo }
    }

    /// Lists disasters, newest first. An empty `tag` is ignored.
    #[instrument(skip(self))]
    pub async fn list(&self, tag: Option<&str>) -> Result<Vec<Disaster>, DomainError> {
        let tag = tag.map(str::trim).filter(|t| !t.is_empty());
        self.disaster_repo.list(tag).await
    }
}
