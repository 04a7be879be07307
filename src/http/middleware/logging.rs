//! Request logging.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::http::request::RequestIdExt;
use crate::observability::metrics;

/// Log every request on arrival and record its outcome in metrics.
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let request_id = request.request_id().unwrap_or("unknown").to_string();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Request received"
    );

    let response = next.run(request).await;
    let status = response.status();

    metrics::record_request(method.as_str(), status.as_u16(), start);
    tracing::debug!(
        request_id = %request_id,
        status = status.as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}
