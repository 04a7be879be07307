//! API key authentication.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::config::AuthConfig;
use crate::http::error::{ApiError, ApiResult};

/// Message sent with every authentication failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: Invalid API Key";

/// Reject the request unless the configured header carries the shared key.
pub async fn require_api_key(
    State(auth): State<AuthConfig>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let provided = request
        .headers()
        .get(auth.header.as_str())
        .and_then(|v| v.to_str().ok());

    // Plain equality: one static shared key, no per-user secrets. Not constant-time.
    if provided != Some(auth.api_key.as_str()) {
        return Err(ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()));
    }

    Ok(next.run(request).await)
}
