use async_trait::async_trait;
use relief_application::ports::{
    Geocoder, ImageVerifier, LocationExtractor, OfficialUpdatesSource, SocialMediaSource,
};
use relief_domain::{Coordinates, DomainError, ImageVerification, SocialMediaPost};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

fn provider_failure(service: &str) -> DomainError {
    DomainError::ExternalService(format!("{service}: connection refused"))
}

// ============================================================================
// Mock LocationExtractor
// ============================================================================

/// Answers from a description -> place table; unknown descriptions get `None`.
#[derive(Default)]
pub struct MockLocationExtractor {
    answers: Mutex<HashMap<String, Option<String>>>,
    calls: Mutex<Vec<String>>,
    should_fail: AtomicBool,
}

impl MockLocationExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(self, description: &str, place: Option<&str>) -> Self {
        self.answers
            .lock()
            .unwrap()
            .insert(description.to_string(), place.map(str::to_string));
        self
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LocationExtractor for MockLocationExtractor {
    async fn extract_location(&self, description: &str) -> Result<Option<String>, DomainError> {
        self.calls.lock().unwrap().push(description.to_string());
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(provider_failure("gemini"));
        }
        Ok(self
            .answers
            .lock()
            .unwrap()
            .get(description)
            .cloned()
            .flatten())
    }
}

// ============================================================================
// Mock Geocoder
// ============================================================================

#[derive(Default)]
pub struct MockGeocoder {
    places: Mutex<HashMap<String, Coordinates>>,
    calls: Mutex<Vec<String>>,
    should_fail: AtomicBool,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(self, place: &str, lat: f64, lon: f64) -> Self {
        self.places
            .lock()
            .unwrap()
            .insert(place.to_string(), Coordinates::new(lat, lon));
        self
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn geocode(&self, place_name: &str) -> Result<Option<Coordinates>, DomainError> {
        self.calls.lock().unwrap().push(place_name.to_string());
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(provider_failure("google"));
        }
        Ok(self.places.lock().unwrap().get(place_name).copied())
    }
}

// ============================================================================
// Mock SocialMediaSource / OfficialUpdatesSource / ImageVerifier
// ============================================================================

#[derive(Default)]
pub struct MockSocialMediaSource {
    call_count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockSocialMediaSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl SocialMediaSource for MockSocialMediaSource {
    async fn fetch_posts(&self, disaster_id: &str) -> Result<Vec<SocialMediaPost>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(provider_failure("social"));
        }
        Ok(vec![SocialMediaPost::new(
            &format!("#floodrelief update for {disaster_id}"),
            "citizen1",
        )])
    }
}

#[derive(Default)]
pub struct MockOfficialUpdatesSource {
    headlines: Vec<String>,
    call_count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockOfficialUpdatesSource {
    pub fn with_headlines(headlines: &[&str]) -> Self {
        Self {
            headlines: headlines.iter().map(|h| h.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl OfficialUpdatesSource for MockOfficialUpdatesSource {
    async fn fetch_updates(&self, _disaster_id: &str) -> Result<Vec<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(provider_failure("redcross"));
        }
        Ok(self.headlines.clone())
    }
}

#[derive(Default)]
pub struct MockImageVerifier {
    call_count: AtomicU64,
}

impl MockImageVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ImageVerifier for MockImageVerifier {
    async fn verify(&self, _image_url: &str) -> Result<ImageVerification, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(ImageVerification {
            verified: true,
            message: "No manipulation detected".to_string(),
        })
    }
}
