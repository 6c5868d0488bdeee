use async_trait::async_trait;
use relief_domain::{DomainError, NearbyQuery, NewResource, Resource};

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn create(&self, resource: NewResource) -> Result<Resource, DomainError>;

    /// Resources within the query radius, nearest first.
    async fn find_nearby(&self, query: NearbyQuery) -> Result<Vec<Resource>, DomainError>;
}
