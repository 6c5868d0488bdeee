use relief_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::DisasterRepository;

pub struct DeleteDisasterUseCase {
    disaster_repo: Arc<dyn DisasterRepository>,
}

impl DeleteDisasterUseCase {
    pub fn new(disaster_repo: Arc<dyn DisasterRepository>) -> Self {
        Self { disaster_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.disaster_repo.delete(id).await?;

        info!(disaster_id = id, "Disaster deleted successfully");

        Ok(())
    }
}
