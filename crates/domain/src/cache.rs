use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Namespace tag that prefixes every cache key.
///
/// Each enrichment adapter owns exactly one namespace so that adapters sharing
/// the same store can never collide on a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheNamespace {
    /// Free-text location extraction (language model)
    LocationExtraction,
    /// Place name to coordinates
    Geocoding,
    /// Social media mentions for a disaster
    SocialMedia,
    /// Scraped official updates for a disaster
    OfficialUpdates,
    /// Image authenticity checks
    ImageVerification,
}

impl CacheNamespace {
    /// Returns the literal key prefix for this namespace
    pub fn prefix(&self) -> &'static str {
        match self {
            CacheNamespace::LocationExtraction => "gemini_",
            CacheNamespace::Geocoding => "google_",
            CacheNamespace::SocialMedia => "social_",
            CacheNamespace::OfficialUpdates => "updates_",
            CacheNamespace::ImageVerification => "verify_",
        }
    }
}

/// Deterministic cache key: namespace prefix followed by the raw discriminant.
///
/// The discriminant is used verbatim (no trimming, no case folding) so that
/// repeated calls with identical inputs always land on the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(namespace: CacheNamespace, discriminant: &str) -> Self {
        let mut key = String::with_capacity(namespace.prefix().len() + discriminant.len());
        key.push_str(namespace.prefix());
        key.push_str(discriminant);
        Self(key)
    }

    /// Wraps an already-built key. Rejects the empty string.
    pub fn from_raw(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.is_empty() {
            return Err(DomainError::InvalidCacheKey(
                "cache key cannot be empty".to_string(),
            ));
        }
        Ok(Self(key))
    }

    pub fn location_extraction(description: &str) -> Self {
        Self::new(CacheNamespace::LocationExtraction, description)
    }

    pub fn geocoding(place_name: &str) -> Self {
        Self::new(CacheNamespace::Geocoding, place_name)
    }

    pub fn social_media(disaster_id: &str) -> Self {
        Self::new(CacheNamespace::SocialMedia, disaster_id)
    }

    pub fn official_updates(disaster_id: &str) -> Self {
        Self::new(CacheNamespace::OfficialUpdates, disaster_id)
    }

    pub fn image_verification(image_url: &str) -> Self {
        Self::new(CacheNamespace::ImageVerification, image_url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single row of the key-value cache store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    pub value: serde_json::Value,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(key: impl Into<String>, value: serde_json::Value, expires_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            value,
            expires_at,
        }
    }

    /// An entry is fresh strictly before its expiry instant.
    #[inline]
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_fresh_at(now)
    }
}
