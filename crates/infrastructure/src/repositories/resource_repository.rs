use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use relief_application::ports::ResourceRepository;
use relief_domain::{Coordinates, DomainError, NearbyQuery, NewResource, Resource};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, error, instrument};

type ResourceRow = (i64, Option<i64>, String, Option<String>, String, f64, f64, String);

/// Resources with plain `lat`/`lon` columns.
///
/// Radius queries prefilter on a bounding box in SQL and finish with an exact
/// haversine check here, since SQLite has no geography type.
pub struct SqliteResourceRepository {
    pool: SqlitePool,
}

impl SqliteResourceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_resource(row: ResourceRow) -> Result<Resource, DomainError> {
        let (id, disaster_id, name, location_name, resource_type, lat, lon, created_at) = row;

        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| {
                DomainError::DatabaseError(format!("Corrupt created_at for resource {}: {}", id, e))
            })?
            .with_timezone(&Utc);

        Ok(Resource {
            id: Some(id),
            disaster_id,
            name: Arc::from(name.as_str()),
            location_name: location_name.map(|s| Arc::from(s.as_str())),
            resource_type: Arc::from(resource_type.as_str()),
            coordinates: Coordinates::new(lat, lon),
            created_at,
        })
    }
}

#[async_trait]
impl ResourceRepository for SqliteResourceRepository {
    #[instrument(skip(self, resource), fields(name = %resource.name))]
    async fn create(&self, resource: NewResource) -> Result<Resource, DomainError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO resources (disaster_id, name, location_name, type, lat, lon, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(resource.disaster_id)
        .bind(&resource.name)
        .bind(&resource.location_name)
        .bind(&resource.resource_type)
        .bind(resource.coordinates.lat)
        .bind(resource.coordinates.lon)
        .bind(created_at.to_rfc3339_opts(SecondsFormat::Millis, true))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create resource");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Resource {
            id: Some(result.last_insert_rowid()),
            disaster_id: resource.disaster_id,
            name: Arc::from(resource.name.as_str()),
            location_name: resource.location_name.as_deref().map(Arc::from),
            resource_type: Arc::from(resource.resource_type.as_str()),
            coordinates: resource.coordinates,
            created_at,
        })
    }

    #[instrument(skip(self))]
    async fn find_nearby(&self, query: NearbyQuery) -> Result<Vec<Resource>, DomainError> {
        let (min_lat, max_lat, mut min_lon, mut max_lon) = query.bounding_box();
        // Box crosses the antimeridian: fall back to a latitude-only prefilter
        if min_lon < -180.0 || max_lon > 180.0 {
            min_lon = -180.0;
            max_lon = 180.0;
        }

        let rows = sqlx::query_as::<_, ResourceRow>(
            "SELECT id, disaster_id, name, location_name, type, lat, lon, created_at
             FROM resources
             WHERE lat BETWEEN ? AND ? AND lon BETWEEN ? AND ?",
        )
        .bind(min_lat)
        .bind(max_lat)
        .bind(min_lon)
        .bind(max_lon)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query nearby resources");
            DomainError::DatabaseError(e.to_string())
        })?;

        let candidates = rows.len();
        let mut nearby = rows
            .into_iter()
            .map(Self::row_to_resource)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|r| query.contains(&r.coordinates))
            .map(|r| (query.center.distance_meters(&r.coordinates), r))
            .collect::<Vec<_>>();

        nearby.sort_by(|a, b| a.0.total_cmp(&b.0));

        debug!(candidates, matched = nearby.len(), "Nearby resources filtered");

        Ok(nearby.into_iter().map(|(_, r)| r).collect())
    }
}
