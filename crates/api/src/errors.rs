use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relief_domain::DomainError;
use tracing::error;

use crate::dto::ErrorResponse;

/// Message returned for enrichment failures; provider details stay in the logs.
pub const ENRICHMENT_FAILED_MESSAGE: &str = "Failed to fetch enrichment data.";

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// HTTP error rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Like `From<DomainError>`, but with a route-specific message for enrichment failures.
    pub fn enrichment(err: DomainError, message: &str) -> Self {
        match err {
            DomainError::EnrichmentFailed(detail) => {
                error!(detail = %detail, "Enrichment failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            other => other.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingField(field) => {
                Self::bad_request(format!("Missing {} in request body", field))
            }
            DomainError::InvalidInput(msg) | DomainError::InvalidCacheKey(msg) => {
                Self::bad_request(msg)
            }
            DomainError::DisasterNotFound(id) => {
                Self::new(StatusCode::NOT_FOUND, format!("Disaster {} not found", id))
            }
            DomainError::EnrichmentFailed(detail) => {
                error!(detail = %detail, "Enrichment failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, ENRICHMENT_FAILED_MESSAGE)
            }
            other => {
                error!(error = %other, "Request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
