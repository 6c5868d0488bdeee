use axum::{extract::Request, middleware::Next, response::Response};

pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity assumed when a request names no user
pub const DEFAULT_USER_ID: &str = "netrunnerX";

/// Caller identity attached to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
}

impl AuthUser {
    fn from_request(request: &Request) -> Self {
        let id = request
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_USER_ID);

        Self { id: id.to_string() }
    }
}

/// Mock authentication: trusts the `x-user-id` header and never rejects.
pub async fn mock_auth(mut request: Request, next: Next) -> Response {
    let user = AuthUser::from_request(&request);
    request.extensions_mut().insert(user);
    next.run(request).await
}
