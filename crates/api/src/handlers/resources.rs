use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use relief_domain::Coordinates;
use tracing::{debug, instrument};

use crate::{
    dto::{NearbyResourcesQuery, ResourceResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/disasters/{id}/resources", get(nearby_resources))
}

/// Resources around `lat`/`lon`. The disaster id only scopes the URL.
#[instrument(skip(state))]
async fn nearby_resources(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<NearbyResourcesQuery>,
) -> Result<Json<Vec<ResourceResponse>>, ApiError> {
    let (Some(lat), Some(lon)) = (params.lat, params.lon) else {
        return Err(ApiError::bad_request("Missing lat or lon query parameter"));
    };

    let resources = state
        .nearby_resources
        .execute(Coordinates::new(lat, lon))
        .await?;

    debug!(disaster_id = %id, count = resources.len(), "Nearby resources retrieved");
    Ok(Json(
        resources
            .into_iter()
            .map(ResourceResponse::from_resource)
            .collect(),
    ))
}
