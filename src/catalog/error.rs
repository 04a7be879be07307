//! Catalog error definitions.

use thiserror::Error;

use crate::store::StoreError;

/// Errors raised by validation and queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Create/update payload is missing a field or has the wrong type.
    #[error("Invalid product data")]
    InvalidProduct,

    /// Search was requested without a `name` term.
    #[error("Search term is required")]
    MissingSearchTerm,

    /// `page` or `limit` is not a positive integer.
    #[error("Invalid pagination parameter '{param}': expected a positive integer, got '{value}'")]
    InvalidPagination { param: &'static str, value: String },

    /// The referenced product does not exist (or the id is not one we could have issued).
    #[error("Product not found")]
    ProductNotFound,
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => CatalogError::ProductNotFound,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_display() {
        assert_eq!(CatalogError::InvalidProduct.to_string(), "Invalid product data");
        assert_eq!(
            CatalogError::MissingSearchTerm.to_string(),
            "Search term is required"
        );

        let err = CatalogError::InvalidPagination {
            param: "page",
            value: "abc".into(),
        };
        assert!(err.to_string().contains("'page'"));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_store_not_found_conversion() {
        let err: CatalogError = StoreError::NotFound(Uuid::new_v4()).into();
        assert_eq!(err, CatalogError::ProductNotFound);
        assert_eq!(err.to_string(), "Product not found");
    }
}
