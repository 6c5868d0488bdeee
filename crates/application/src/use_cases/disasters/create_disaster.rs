use relief_domain::{Disaster, DomainError, NewDisaster, NewResource};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{Clock, DisasterRepository, ResourceRepository};

/// Resource type recorded for the location attached to a report
pub const REPORT_RESOURCE_TYPE: &str = "report";

/// Use case for submitting a disaster report.
///
/// The stored record is owned by the reporting user and its audit trail is
/// seeded with a single `create` entry. When the report carries coordinates
/// a resource row is recorded as well; failing to record it is logged and
/// does not fail the report.
pub struct CreateDisasterUseCase {
    disaster_repo: Arc<dyn DisasterRepository>,
    resource_repo: Arc<dyn ResourceRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateDisasterUseCase {
    pub fn new(
        disaster_repo: Arc<dyn DisasterRepository>,
        resource_repo: Arc<dyn ResourceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            disaster_repo,
            resource_repo,
            clock,
        }
    }

    #[instrument(skip(self, report), fields(title = %report.title))]
    pub async fn execute(&self, report: NewDisaster, user_id: &str) -> Result<Disaster, DomainError> {
        report.validate()?;

        let coordinates = report.coordinates;
        let disaster = Disaster::report(report, user_id, self.clock.now());
        let created = self.disaster_repo.create(disaster).await?;

        if let Some(coordinates) = coordinates {
            let resource = NewResource {
                disaster_id: created.id,
                name: created.title.to_string(),
                location_name: created.location_name.as_ref().map(|s| s.to_string()),
                resource_type: REPORT_RESOURCE_TYPE.to_string(),
                coordinates,
            };
            if let Err(e) = self.resource_repo.create(resource).await {
                warn!(
                    disaster_id = ?created.id,
                    error = %e,
                    "Failed to record resource for disaster report"
                );
            }
        }

        info!(
            disaster_id = ?created.id,
            owner_id = %created.owner_id,
            "Disaster created successfully"
        );

        Ok(created)
    }
}
