use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Extension, Router,
};
use relief_domain::{DisasterUpdate, NewDisaster};
use tracing::{debug, info, instrument};

use crate::{
    dto::{DeleteResponse, DisasterResponse, ListDisastersQuery},
    errors::ApiError,
    extract::JsonBody,
    middleware::AuthUser,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/disasters", get(list_disasters).post(create_disaster))
        .route("/disasters/{id}", put(update_disaster).delete(delete_disaster))
}

#[instrument(skip(state, user, report), fields(user_id = %user.id))]
async fn create_disaster(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(report): JsonBody<NewDisaster>,
) -> Result<(StatusCode, Json<Vec<DisasterResponse>>), ApiError> {
    let created = state.create_disaster.execute(report, &user.id).await?;

    info!(id = ?created.id, "Disaster reported");
    Ok((
        StatusCode::CREATED,
        Json(vec![DisasterResponse::from_disaster(created)]),
    ))
}

#[instrument(skip(state))]
async fn list_disasters(
    State(state): State<AppState>,
    Query(params): Query<ListDisastersQuery>,
) -> Result<Json<Vec<DisasterResponse>>, ApiError> {
    let disasters = state.get_disasters.list(params.tag.as_deref()).await?;

    debug!(count = disasters.len(), "Disasters retrieved successfully");
    Ok(Json(
        disasters
            .into_iter()
            .map(DisasterResponse::from_disaster)
            .collect(),
    ))
}

#[instrument(skip(state, user, update), fields(user_id = %user.id))]
async fn update_disaster(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    JsonBody(update): JsonBody<DisasterUpdate>,
) -> Result<Json<Vec<DisasterResponse>>, ApiError> {
    let updated = state.update_disaster.execute(id, update, &user.id).await?;

    info!(id, "Disaster updated");
    Ok(Json(vec![DisasterResponse::from_disaster(updated)]))
}

#[instrument(skip(state))]
async fn delete_disaster(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.delete_disaster.execute(id).await?;

    info!(id, "Disaster deleted");
    Ok(Json(DeleteResponse { success: true }))
}
