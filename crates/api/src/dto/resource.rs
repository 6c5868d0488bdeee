use relief_domain::Resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub id: i64,
    pub disaster_id: Option<i64>,
    pub name: String,
    pub location_name: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub lat: f64,
    pub lon: f64,
}

impl ResourceResponse {
    pub fn from_resource(resource: Resource) -> Self {
        Self {
            id: resource.id.unwrap_or(0),
            disaster_id: resource.disaster_id,
            name: resource.name.to_string(),
            location_name: resource.location_name.as_ref().map(|s| s.to_string()),
            resource_type: resource.resource_type.to_string(),
            lat: resource.coordinates.lat,
            lon: resource.coordinates.lon,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyResourcesQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
