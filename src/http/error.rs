//! Error translation: the single place failures become HTTP responses.
//!
//! # Responsibilities
//! - Map each error kind to its status code
//! - Log the failure before responding
//! - Render `{"error": "<message>"}`
//!
//! # Design Decisions
//! - Known kinds keep their own message
//! - Unexpected failures always answer "Internal Server Error"; detail goes to the log only
//! - Panics are converted here too, so sync and async failures look identical to clients

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::http::response::ErrorBody;
use crate::store::StoreError;

/// Message returned for every unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Errors surfaced by the request pipeline and handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid payload, missing search term, bad pagination parameters.
    #[error("{0}")]
    Validation(String),

    /// Request body is not valid JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    /// Request body exceeds the configured limit.
    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Missing or wrong API key.
    #[error("{0}")]
    Unauthorized(String),

    /// Unknown product or route.
    #[error("{0}")]
    NotFound(String),

    /// Known path, unsupported method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Anything else. The message is logged, never sent.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for handlers and middleware.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Status code for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::MalformedBody(_) => "Malformed JSON body".to_string(),
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ProductNotFound => ApiError::NotFound(err.to_string()),
            CatalogError::InvalidProduct
            | CatalogError::MissingSearchTerm
            | CatalogError::InvalidPagination { .. } => ApiError::Validation(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        CatalogError::from(err).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

/// Turn a handler panic into the standard 500 response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use uuid::Uuid;

    async fn render_response(response: Response) -> (StatusCode, ErrorBody) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn render(err: ApiError) -> (StatusCode, ErrorBody) {
        render_response(err.into_response()).await
    }

    #[tokio::test]
    async fn test_known_kinds_keep_message() {
        let (status, body) = render(ApiError::Validation("Invalid product data".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ErrorBody::new("Invalid product data"));

        let (status, body) = render(ApiError::NotFound("Product not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Product not found");

        let (status, body) =
            render(ApiError::Unauthorized("Unauthorized: Invalid API Key".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Unauthorized: Invalid API Key");

        let (status, body) = render(ApiError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, ErrorBody::new("Method Not Allowed"));
    }

    #[tokio::test]
    async fn test_internal_detail_is_hidden() {
        let (status, body) = render(ApiError::Internal("lock poisoned at store.rs:42".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_body_errors() {
        let (status, body) = render(ApiError::MalformedBody("expected value at line 1".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Malformed JSON body");

        let (status, body) = render(ApiError::PayloadTooLarge { limit: 10 }).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body.error, "Request body exceeds 10 bytes");
    }

    #[tokio::test]
    async fn test_panic_response() {
        let (status, body) = render_response(panic_response(Box::new("boom"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_catalog_mapping() {
        let err: ApiError = CatalogError::MissingSearchTerm.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Search term is required");

        let err: ApiError = StoreError::NotFound(Uuid::new_v4()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Product not found");
    }
}
