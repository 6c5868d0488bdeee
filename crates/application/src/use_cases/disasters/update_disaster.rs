use relief_domain::{Disaster, DisasterUpdate, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{Clock, DisasterRepository};

/// Use case for updating a disaster.
///
/// The audit trail is replaced by a single `update` entry rather than
/// appended to; earlier entries, the `create` one included, are dropped.
pub struct UpdateDisasterUseCase {
    disaster_repo: Arc<dyn DisasterRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateDisasterUseCase {
    pub fn new(disaster_repo: Arc<dyn DisasterRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            disaster_repo,
            clock,
        }
    }

    /// # Errors
    ///
    /// * `DomainError::InvalidInput` - If a provided field fails validation
    /// * `DomainError::DisasterNotFound` - If the disaster doesn't exist
    /// * `DomainError::DatabaseError` - If a database error occurs
    #[instrument(skip(self, update))]
    pub async fn execute(
        &self,
        id: i64,
        update: DisasterUpdate,
        user_id: &str,
    ) -> Result<Disaster, DomainError> {
        update.validate()?;

        let mut disaster = self
            .disaster_repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::DisasterNotFound(id))?;

        update.apply_to(&mut disaster, user_id, self.clock.now());
        let updated = self.disaster_repo.update(disaster).await?;

        info!(
            disaster_id = id,
            user_id = %user_id,
            "Disaster updated successfully"
        );

        Ok(updated)
    }
}
