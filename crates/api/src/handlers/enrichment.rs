use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use relief_domain::{GeocodeResult, ImageVerification, SocialMediaPost};
use tracing::{debug, instrument};

use crate::{
    dto::{GeocodeRequest, VerifyImageRequest},
    errors::ApiError,
    extract::JsonBody,
    state::AppState,
};

const GEOCODE_FAILED_MESSAGE: &str = "Failed to extract or convert location.";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/disasters/geocode", post(geocode))
        .route("/disasters/{id}/social-media", get(social_media))
        .route("/disasters/{id}/official-updates", get(official_updates))
        .route("/disasters/{id}/verify-image", post(verify_image))
}

#[instrument(skip(state, req))]
async fn geocode(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<GeocodeRequest>,
) -> Result<Json<GeocodeResult>, ApiError> {
    let description = req.description.unwrap_or_default();

    state
        .geocode
        .execute(&description)
        .await
        .map(Json)
        .map_err(|e| ApiError::enrichment(e, GEOCODE_FAILED_MESSAGE))
}

#[instrument(skip(state))]
async fn social_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SocialMediaPost>>, ApiError> {
    Ok(Json(state.social_media.execute(&id).await?))
}

#[instrument(skip(state))]
async fn official_updates(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.official_updates.execute(&id).await?))
}

#[instrument(skip(state, req))]
async fn verify_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<VerifyImageRequest>,
) -> Result<Json<ImageVerification>, ApiError> {
    let image_url = req.image_url.unwrap_or_default();
    debug!(disaster_id = %id, "Verifying image");

    Ok(Json(state.verify_image.execute(&image_url).await?))
}
