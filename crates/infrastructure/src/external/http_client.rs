use relief_domain::DomainError;
use std::time::Duration;

const USER_AGENT: &str = concat!("relief-api/", env!("CARGO_PKG_VERSION"));

/// Shared pooled client for every provider adapter.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .build()
        .map_err(|e| DomainError::ExternalService(format!("Failed to build HTTP client: {}", e)))
}

/// Sends the request and rejects non-2xx answers.
pub(crate) async fn send_checked(
    service: &str,
    request: reqwest::RequestBuilder,
) -> Result<reqwest::Response, DomainError> {
    let response = request
        .send()
        .await
        .map_err(|e| DomainError::ExternalService(format!("{} request failed: {}", service, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DomainError::ExternalService(format!(
            "{} returned HTTP {}: {}",
            service,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    Ok(response)
}
