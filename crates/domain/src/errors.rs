use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid cache key: {0}")]
    InvalidCacheKey(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache read failed: {0}")]
    CacheRead(String),

    #[error("Cache write failed: {0}")]
    CacheWrite(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Invalid response from {service}: {message}")]
    InvalidResponse { service: String, message: String },

    #[error("Enrichment failed: {0}")]
    EnrichmentFailed(String),

    #[error("Disaster not found: {0}")]
    DisasterNotFound(i64),
}

impl DomainError {
    /// Errors the caller caused by sending bad input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingField(_)
                | DomainError::InvalidInput(_)
                | DomainError::InvalidCacheKey(_)
        )
    }
}

impl From<String> for DomainError {
    fn from(message: String) -> Self {
        DomainError::InvalidInput(message)
    }
}
