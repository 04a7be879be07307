//! Product route handlers.
//!
//! Handlers only touch memory, but every one is async so any failure,
//! whatever its origin, leaves through the same `ApiResult` path.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::catalog::{self, CategoryStats, Pagination, ProductPage, SearchResults};
use crate::http::error::{ApiError, ApiResult};
use crate::http::extract::{ApiQuery, Payload, ProductIdPath};
use crate::http::server::AppState;
use crate::store::Product;

/// Query parameters for `GET /api/products`.
///
/// Kept as raw strings so pagination parsing reports its own error.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Query parameters for `GET /api/products/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> ApiResult<Json<ProductPage>> {
    let pagination = Pagination::parse(
        params.page.as_deref(),
        params.limit.as_deref(),
        &state.pagination,
    )?;

    Ok(Json(catalog::list_products(
        state.store.list_all(),
        params.category.as_deref(),
        pagination,
    )))
}

pub async fn search_products(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> ApiResult<Json<SearchResults>> {
    let results = catalog::search_products(state.store.list_all(), params.name.as_deref())?;
    Ok(Json(results))
}

pub async fn product_stats(State(state): State<AppState>) -> Json<CategoryStats> {
    Json(catalog::category_stats(&state.store.list_all()))
}

pub async fn get_product(
    State(state): State<AppState>,
    ProductIdPath(id): ProductIdPath,
) -> ApiResult<Json<Product>> {
    Ok(Json(catalog::find_product(&state.store, &id)?))
}

pub async fn create_product(
    State(state): State<AppState>,
    Payload(payload): Payload,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let fields = catalog::validate_product(&payload)?;
    let product = state.store.insert(Product::new(fields));

    tracing::info!(id = %product.id, name = %product.fields.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace every field of an existing product.
///
/// Existence is checked before the payload, so an unknown id is a 404 even
/// when the body is also invalid.
pub async fn update_product(
    State(state): State<AppState>,
    ProductIdPath(id): ProductIdPath,
    Payload(payload): Payload,
) -> ApiResult<Json<Product>> {
    let id = catalog::parse_product_id(&id)?;
    state.store.get_by_id(id)?;

    let fields = catalog::validate_product(&payload)?;
    let product = state.store.replace_by_id(id, fields)?;

    tracing::info!(id = %product.id, "Product updated");
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    ProductIdPath(id): ProductIdPath,
) -> ApiResult<StatusCode> {
    let id = catalog::parse_product_id(&id)?;
    state.store.delete_by_id(id)?;

    tracing::info!(id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

/// Fallback for known paths hit with a method they do not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
