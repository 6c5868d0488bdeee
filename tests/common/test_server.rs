use relief_api::{create_api_routes, AppState};
use relief_application::ports::{Clock, SystemClock};
use relief_application::services::CacheAsideResolver;
use relief_application::use_cases::*;
use relief_infrastructure::database::create_pool;
use relief_infrastructure::external::{
    build_http_client, FixtureSocialMediaSource, GeminiLocationExtractor, GoogleGeocoder,
    ScrapedOfficialUpdates, StaticImageVerifier,
};
use relief_infrastructure::repositories::{
    SqliteCacheStore, SqliteDisasterRepository, SqliteResourceRepository,
};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// The full HTTP stack on an ephemeral port, backed by in-memory SQLite and
/// with every outbound provider pointed at `provider_base_url`.
pub struct TestServer {
    addr: SocketAddr,
    pool: SqlitePool,
    client: reqwest::Client,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start(provider_base_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        TestServerBuilder::new(provider_base_url).build().await
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn cache_keys(&self) -> Vec<String> {
        sqlx::query_as::<_, (String,)>("SELECT key FROM cache ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|(k,)| k)
            .collect()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub struct TestServerBuilder {
    provider_base_url: String,
    cache_ttl: Duration,
    api_key: Option<String>,
}

impl TestServerBuilder {
    pub fn new(provider_base_url: &str) -> Self {
        Self {
            provider_base_url: provider_base_url.to_string(),
            cache_ttl: Duration::from_secs(3600),
            api_key: None,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub async fn build(self) -> Result<TestServer, Box<dyn std::error::Error>> {
        let pool = create_pool("sqlite::memory:", 1).await?;
        let http = build_http_client(Duration::from_secs(5))?;
        let base = self.provider_base_url.trim_end_matches('/');

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let cache = Arc::new(SqliteCacheStore::new(pool.clone()));
        let disasters = Arc::new(SqliteDisasterRepository::new(pool.clone()));
        let resources = Arc::new(SqliteResourceRepository::new(pool.clone()));
        let resolver = Arc::new(CacheAsideResolver::with_clock(
            cache,
            clock.clone(),
            self.cache_ttl,
        ));

        let extractor = Arc::new(GeminiLocationExtractor::new(
            http.clone(),
            base,
            GEMINI_MODEL,
            Some("gemini-test-key".to_string()),
        ));
        let geocoder = Arc::new(GoogleGeocoder::new(
            http.clone(),
            &format!("{base}/maps/api/geocode/json"),
            Some("maps-test-key".to_string()),
        ));
        let updates = Arc::new(ScrapedOfficialUpdates::new(
            http,
            &format!("{base}/redcross"),
        )?);

        let state = AppState {
            create_disaster: Arc::new(CreateDisasterUseCase::new(
                disasters.clone(),
                resources.clone(),
                clock.clone(),
            )),
            get_disasters: Arc::new(GetDisastersUseCase::new(disasters.clone())),
            update_disaster: Arc::new(UpdateDisasterUseCase::new(disasters.clone(), clock)),
            delete_disaster: Arc::new(DeleteDisasterUseCase::new(disasters)),
            geocode: Arc::new(GeocodeDescriptionUseCase::new(
                resolver.clone(),
                extractor,
                geocoder,
            )),
            social_media: Arc::new(GetSocialMediaUseCase::new(
                resolver.clone(),
                Arc::new(FixtureSocialMediaSource),
            )),
            official_updates: Arc::new(GetOfficialUpdatesUseCase::new(resolver.clone(), updates)),
            verify_image: Arc::new(VerifyImageUseCase::new(
                resolver,
                Arc::new(StaticImageVerifier),
            )),
            nearby_resources: Arc::new(GetNearbyResourcesUseCase::new(resources, 10_000.0)),
            api_key: self.api_key.as_deref().map(Arc::from),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = create_api_routes(state);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(TestServer {
            addr,
            pool,
            client: reqwest::Client::new(),
            shutdown_tx: Some(shutdown_tx),
        })
    }
}
