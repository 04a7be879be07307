//! Product payload validation.
//!
//! # Rules
//! - `name`, `description`, `category`: present, string, non-empty
//! - `price`: present, JSON number (a numeric string is rejected)
//! - `inStock`: present, JSON boolean (no truthy coercion)
//!
//! Any failure yields [`CatalogError::InvalidProduct`]; callers never learn
//! which field was wrong.

use serde_json::Value;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::store::ProductFields;

/// Check a loosely typed payload and return the normalized field set.
///
/// Extra keys (including `id`) are ignored: the id is assigned or preserved by the caller.
pub fn validate_product(payload: &Value) -> CatalogResult<ProductFields> {
    let fields = ProductFields {
        name: required_text(payload, "name")?,
        description: required_text(payload, "description")?,
        price: payload
            .get("price")
            .and_then(Value::as_f64)
            .ok_or(CatalogError::InvalidProduct)?,
        category: required_text(payload, "category")?,
        in_stock: payload
            .get("inStock")
            .and_then(Value::as_bool)
            .ok_or(CatalogError::InvalidProduct)?,
    };
    Ok(fields)
}

fn required_text(payload: &Value, key: &str) -> CatalogResult<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(CatalogError::InvalidProduct)
}
