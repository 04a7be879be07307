//! Catalog rules: payload validation and read-side queries.
//!
//! # Data Flow
//! ```text
//! POST/PUT payload (serde_json::Value)
//!     → validate.rs (required fields, strict types)
//!     → ProductFields handed to the store
//!
//! GET query parameters
//!     → query.rs (pagination parsing, category filter, name search, stats)
//!     → response DTOs built from a store snapshot
//! ```
//!
//! # Design Decisions
//! - Everything here is a pure function over a snapshot; no locking
//! - Category comparisons fold case; name search is a plain substring match
//! - Validation reports one fixed message, not per-field detail

pub mod error;
pub mod query;
pub mod validate;

pub use error::{CatalogError, CatalogResult};
pub use query::{
    category_stats, find_product, list_products, parse_product_id, search_products, CategoryStats,
    Pagination, ProductPage, SearchResults,
};
pub use validate::validate_product;
