//! JSON body parsing.
//!
//! Only requests declaring a JSON content type are parsed. Anything else (or an
//! empty body) reaches the handler without a payload.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use http_body_util::{BodyExt, LengthLimitError, Limited};

use crate::config::LimitsConfig;
use crate::http::error::{ApiError, ApiResult};
use crate::http::extract::ParsedBody;

/// Buffer and parse a JSON body, attaching the result as [`ParsedBody`].
pub async fn parse_json_body(
    State(limits): State<LimitsConfig>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if !is_json(request.headers()) {
        return Ok(next.run(request).await);
    }

    let (mut parts, body) = request.into_parts();
    let bytes = Limited::new(body, limits.max_body_bytes)
        .collect()
        .await
        .map_err(|e| {
            if e.downcast_ref::<LengthLimitError>().is_some() {
                ApiError::PayloadTooLarge {
                    limit: limits.max_body_bytes,
                }
            } else {
                ApiError::MalformedBody(format!("failed to read body: {e}"))
            }
        })?
        .to_bytes();

    if !bytes.is_empty() {
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        parts.extensions.insert(ParsedBody(value));
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(&headers("application/json")));
        assert!(is_json(&headers("Application/JSON; charset=utf-8")));
        assert!(is_json(&headers("application/merge-patch+json")));
        assert!(!is_json(&headers("text/plain")));
        assert!(!is_json(&headers("application/x-www-form-urlencoded")));
        assert!(!is_json(&HeaderMap::new()));
    }
}
