//! Enrichment endpoints over real HTTP with the providers mocked by wiremock.
//! Each external call must happen at most once per key while the cache entry
//! is fresh.

#[path = "../common/mod.rs"]
mod common;
use common::{TestServer, TestServerBuilder};

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_gemini(providers: &MockServer, answer: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "gemini-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": answer}]}}]
        })))
        .expect(expected_calls)
        .mount(providers)
        .await;
}

async fn mount_geocoder(providers: &MockServer, address: &str, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("address", address))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(providers)
        .await;
}

async fn geocode(server: &TestServer, description: &str) -> (u16, Value) {
    let response = server
        .client()
        .post(server.url("/disasters/geocode"))
        .json(&json!({"description": description}))
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_geocode_calls_each_provider_once_per_key() {
    // Arrange
    let providers = MockServer::start().await;
    mount_gemini(&providers, " Miami, FL \n", 1).await;
    mount_geocoder(
        &providers,
        "Miami, FL",
        json!({"results": [{"geometry": {"location": {"lat": 25.7617, "lng": -80.1918}}}]}),
        1,
    )
    .await;
    let server = TestServer::start(&providers.uri()).await.unwrap();

    // Act
    let (status, first) = geocode(&server, "Flood in Miami").await;
    let (_, second) = geocode(&server, "Flood in Miami").await;

    // Assert
    assert_eq!(status, 200);
    assert_eq!(
        first,
        json!({"location_name": "Miami, FL", "coordinates": {"lat": 25.7617, "lon": -80.1918}})
    );
    assert_eq!(first, second);
    assert_eq!(
        server.cache_keys().await,
        vec!["gemini_Flood in Miami".to_string(), "google_Miami, FL".to_string()]
    );

    server.shutdown();
    // wiremock verifies the expected call counts on drop
}

#[tokio::test]
async fn test_geocode_without_extraction_returns_unknown() {
    let providers = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .expect(1)
        .mount(&providers)
        .await;
    mount_geocoder(&providers, "Unknown", json!({"status": "ZERO_RESULTS", "results": []}), 1).await;
    let server = TestServer::start(&providers.uri()).await.unwrap();

    let (status, body) = geocode(&server, "Trapped on the roof in Houston").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"location_name": "Unknown", "coordinates": {"lat": 0.0, "lon": 0.0}})
    );
    assert!(server
        .cache_keys()
        .await
        .contains(&"google_Unknown".to_string()));

    server.shutdown();
}

#[tokio::test]
async fn test_geocode_provider_outage_is_not_cached() {
    let providers = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&providers)
        .await;
    let server = TestServer::start(&providers.uri()).await.unwrap();

    let (status, body) = geocode(&server, "Flood in Miami").await;
    let (retry_status, _) = geocode(&server, "Flood in Miami").await;

    assert_eq!(status, 500);
    assert_eq!(body, json!({"error": "Failed to extract or convert location."}));
    assert_eq!(retry_status, 500);
    assert!(server.cache_keys().await.is_empty());

    server.shutdown();
}

#[tokio::test]
async fn test_expired_entries_are_recomputed() {
    let providers = MockServer::start().await;
    mount_gemini(&providers, "Miami, FL", 2).await;
    mount_geocoder(
        &providers,
        "Miami, FL",
        json!({"results": [{"geometry": {"location": {"lat": 25.7617, "lng": -80.1918}}}]}),
        2,
    )
    .await;
    let server = TestServerBuilder::new(&providers.uri())
        .with_cache_ttl(Duration::from_millis(200))
        .build()
        .await
        .unwrap();

    geocode(&server, "Flood in Miami").await;
    tokio::time::sleep(Duration::from_millis(400)).await;
    let (status, _) = geocode(&server, "Flood in Miami").await;

    assert_eq!(status, 200);
    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cache")
        .fetch_one(server.pool())
        .await
        .unwrap();
    assert_eq!(rows, 2);

    server.shutdown();
}

#[tokio::test]
async fn test_official_updates_scraped_once_per_disaster() {
    let providers = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/redcross"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><h2>Hurricane Relief</h2><h2>Give <b>Blood</b></h2></body></html>",
        ))
        .expect(2)
        .mount(&providers)
        .await;
    let server = TestServer::start(&providers.uri()).await.unwrap();
    let client = server.client();

    let mut bodies = Vec::new();
    for id in ["1", "1", "2"] {
        let body: Value = client
            .get(server.url(&format!("/disasters/{id}/official-updates")))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        bodies.push(body);
    }

    assert_eq!(bodies[0], json!(["Hurricane Relief", "Give Blood"]));
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(
        server.cache_keys().await,
        vec!["updates_1".to_string(), "updates_2".to_string()]
    );

    server.shutdown();
}

#[tokio::test]
async fn test_social_media_and_image_verification_are_cached() {
    let server = TestServer::start("http://127.0.0.1:9").await.unwrap();
    let client = server.client();

    let posts: Value = client
        .get(server.url("/disasters/7/social-media"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(posts[0]["user"], "citizen1");

    let verified: Value = client
        .post(server.url("/disasters/7/verify-image"))
        .json(&json!({"image_url": "https://img.example/roof.jpg"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(verified["verified"], true);

    assert_eq!(
        server.cache_keys().await,
        vec![
            "social_7".to_string(),
            "verify_https://img.example/roof.jpg".to_string()
        ]
    );

    server.shutdown();
}
