use crate::handlers;
use crate::middleware::{mock_auth, require_api_key};
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::disasters::routes())
        .merge(handlers::enrichment::routes())
        .merge(handlers::resources::routes())
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .layer(middleware::from_fn(mock_auth))
        .with_state(state)
}
