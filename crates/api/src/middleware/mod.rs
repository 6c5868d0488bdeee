mod api_key;
mod auth;

pub use api_key::{is_read_only_method, require_api_key, timing_safe_eq, API_KEY_HEADER};
pub use auth::{mock_auth, AuthUser, DEFAULT_USER_ID, USER_ID_HEADER};
