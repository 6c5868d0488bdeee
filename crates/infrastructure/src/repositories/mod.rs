pub mod cache_repository;
pub mod disaster_repository;
pub mod resource_repository;

pub use cache_repository::SqliteCacheStore;
pub use disaster_repository::SqliteDisasterRepository;
pub use resource_repository::SqliteResourceRepository;
