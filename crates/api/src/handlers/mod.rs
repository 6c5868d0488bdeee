pub mod disasters;
pub mod enrichment;
pub mod health;
pub mod resources;

pub use health::health_check;
