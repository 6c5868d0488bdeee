use async_trait::async_trait;
use relief_domain::{Disaster, DomainError};

/// Repository interface for disaster records and their audit trail.
#[async_trait]
pub trait DisasterRepository: Send + Sync {
    /// Persists a new disaster.
    ///
    /// # Returns
    ///
    /// * `Ok(Disaster)` - The stored disaster with its generated ID
    /// * `Err(DomainError::DatabaseError)` - If the insert fails
    async fn create(&self, disaster: Disaster) -> Result<Disaster, DomainError>;

    /// Retrieves a disaster by its ID.
    ///
    /// * `Ok(None)` - If no disaster with this ID exists
    async fn get_by_id(&self, id: i64) -> Result<Option<Disaster>, DomainError>;

    /// Lists disasters, newest first, optionally restricted to those carrying `tag`.
    async fn list(&self, tag: Option<&str>) -> Result<Vec<Disaster>, DomainError>;

    /// Overwrites every mutable column of the stored disaster, audit trail included.
    ///
    /// # Errors
    ///
    /// * `DomainError::DisasterNotFound` - If the disaster doesn't exist
    async fn update(&self, disaster: Disaster) -> Result<Disaster, DomainError>;

    /// Deletes a disaster.
    ///
    /// # Errors
    ///
    /// * `DomainError::DisasterNotFound` - If the disaster doesn't exist
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
