pub mod disaster;
pub mod enrichment;
pub mod resource;

pub use disaster::{DeleteResponse, DisasterResponse, ListDisastersQuery};
pub use enrichment::{GeocodeRequest, VerifyImageRequest};
pub use resource::{NearbyResourcesQuery, ResourceResponse};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
