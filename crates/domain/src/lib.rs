//! Relief API Domain Layer
pub mod cache;
pub mod config;
pub mod disaster;
pub mod enrichment;
pub mod errors;
pub mod resource;
pub mod validators;

pub use cache::{CacheEntry, CacheKey, CacheNamespace};
pub use config::{CliOverrides, Config, ConfigError};
pub use disaster::{AuditAction, AuditEntry, Disaster, DisasterUpdate, NewDisaster};
pub use enrichment::{
    Coordinates, GeocodeResult, ImageVerification, SocialMediaPost, UNKNOWN_LOCATION,
};
pub use errors::DomainError;
pub use resource::{NearbyQuery, NewResource, Resource};
