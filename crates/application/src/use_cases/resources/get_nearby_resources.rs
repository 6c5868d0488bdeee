use relief_domain::{Coordinates, DomainError, NearbyQuery, Resource};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::ResourceRepository;

/// Resources around a point. Not cached: this is a plain store query.
pub struct GetNearbyResourcesUseCase {
    resource_repo: Arc<dyn ResourceRepository>,
    radius_meters: f64,
}

impl GetNearbyResourcesUseCase {
    pub fn new(resource_repo: Arc<dyn ResourceRepository>, radius_meters: f64) -> Self {
        Self {
            resource_repo,
            radius_meters,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, center: Coordinates) -> Result<Vec<Resource>, DomainError> {
        center.validate()?;

        let resources = self
            .resource_repo
            .find_nearby(NearbyQuery::new(center, self.radius_meters))
            .await?;

        debug!(
            count = resources.len(),
            radius_meters = self.radius_meters,
            "Nearby resources retrieved"
        );

        Ok(resources)
    }
}
