//! Extractors whose failures go through [`ApiError`].
//!
//! Axum's stock extractors reject with their own plain-text bodies; these
//! wrappers keep every failure in the `{"error": ...}` shape.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::error::ApiError;

/// JSON payload produced by the body-parsing pipeline step.
#[derive(Debug, Clone)]
pub struct ParsedBody(pub Value);

/// The parsed request body, or `Value::Null` when the request carried none.
#[derive(Debug, Clone)]
pub struct Payload(pub Value);

impl<S> FromRequestParts<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .extensions
            .remove::<ParsedBody>()
            .map(|body| body.0)
            .unwrap_or(Value::Null);
        Ok(Self(value))
    }
}

/// Query-string extractor rejecting with a validation error.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Product id path segment. A segment that cannot be decoded names no product.
#[derive(Debug, Clone)]
pub struct ProductIdPath(pub String);

impl<S> FromRequestParts<S> for ProductIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Undecodable product id");
                ApiError::NotFound("Product not found".to_string())
            })?;
        Ok(Self(id))
    }
}
