//! Outbound adapters for the enrichment ports.

mod fixtures;
mod gemini;
mod google_geocoder;
mod http_client;
mod official_updates;

pub use fixtures::{FixtureSocialMediaSource, StaticImageVerifier};
pub use gemini::GeminiLocationExtractor;
pub use google_geocoder::GoogleGeocoder;
pub use http_client::build_http_client;
pub use official_updates::ScrapedOfficialUpdates;
