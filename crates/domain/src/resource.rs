use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::enrichment::Coordinates;

/// Default search radius for nearby resources, in metres
pub const DEFAULT_NEARBY_RADIUS_METERS: f64 = 10_000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: Option<i64>,
    pub disaster_id: Option<i64>,
    pub name: Arc<str>,
    pub location_name: Option<Arc<str>>,
    pub resource_type: Arc<str>,
    pub coordinates: Coordinates,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewResource {
    pub disaster_id: Option<i64>,
    pub name: String,
    pub location_name: Option<String>,
    pub resource_type: String,
    pub coordinates: Coordinates,
}

/// Point and radius for a nearby-resources lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub center: Coordinates,
    pub radius_meters: f64,
}

impl NearbyQuery {
    pub fn new(center: Coordinates, radius_meters: f64) -> Self {
        Self {
            center,
            radius_meters,
        }
    }

    pub fn contains(&self, point: &Coordinates) -> bool {
        self.center.distance_meters(point) <= self.radius_meters
    }

    /// Latitude/longitude box enclosing the search circle, used as a coarse SQL prefilter.
    /// Returns `(min_lat, max_lat, min_lon, max_lon)`.
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        const METERS_PER_DEGREE: f64 = 111_320.0;

        let dlat = self.radius_meters / METERS_PER_DEGREE;
        let cos_lat = self.center.lat.to_radians().cos().abs().max(1e-6);
        let dlon = (self.radius_meters / (METERS_PER_DEGREE * cos_lat)).min(180.0);

        (
            (self.center.lat - dlat).max(-90.0),
            (self.center.lat + dlat).min(90.0),
            self.center.lon - dlon,
            self.center.lon + dlon,
        )
    }
}
