pub mod contacts;
pub mod health;
pub mod postal;
pub mod users;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::error::ApiError;

/// Pull the bearer credential out of the Authorization header. Scheme
/// validation happens in the identity service; here we only require the
/// header to be present and readable.
pub(crate) fn bearer_from(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("missing authorization header"))
}
