//! Read-side queries over a store snapshot.
//!
//! # Operations
//! - `list_products`: optional category filter, then a `[start, end)` page slice
//! - `search_products`: case-insensitive substring match on name, unpaginated
//! - `category_stats`: product count per lowercased category
//! - `find_product`: single lookup by id
//!
//! # Design Decisions
//! - Pages past the end are empty, never an error; `total` is always the filtered count
//! - Pagination parameters are parsed strictly (positive integers only)

use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::config::PaginationConfig;
use crate::store::{Product, ProductStore};

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    /// Maximum records per page.
    pub limit: usize,
}

impl Pagination {
    /// Parse raw query values, falling back to the configured defaults when absent.
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        defaults: &PaginationConfig,
    ) -> CatalogResult<Self> {
        Ok(Self {
            page: parse_positive("page", page, defaults.default_page)?,
            limit: parse_positive("limit", limit, defaults.default_limit)?,
        })
    }

    /// Index of the first record on this page.
    pub fn start(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_positive(param: &'static str, raw: Option<&str>, default: usize) -> CatalogResult<usize> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CatalogError::InvalidPagination {
            param,
            value: raw.to_string(),
        }),
    }
}

/// One page of a (possibly filtered) listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub products: Vec<Product>,
}

/// Every product whose name matched a search term.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub results: Vec<Product>,
    pub total: usize,
}

/// Product counts keyed by lowercased category, in first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryStats {
    pub stats: IndexMap<String, usize>,
}

/// Filter by category (when given and non-empty) and cut out the requested page.
pub fn list_products(
    products: Vec<Product>,
    category: Option<&str>,
    pagination: Pagination,
) -> ProductPage {
    let filtered: Vec<Product> = match category.filter(|c| !c.is_empty()) {
        Some(category) => {
            let wanted = category.to_lowercase();
            products
                .into_iter()
                .filter(|p| p.category_key() == wanted)
                .collect()
        }
        None => products,
    };

    let total = filtered.len();
    let products = filtered
        .into_iter()
        .skip(pagination.start())
        .take(pagination.limit)
        .collect();

    ProductPage {
        total,
        page: pagination.page,
        limit: pagination.limit,
        products,
    }
}

/// Case-insensitive substring search on product names.
///
/// A missing or empty term is rejected.
pub fn search_products(products: Vec<Product>, term: Option<&str>) -> CatalogResult<SearchResults> {
    let term = term
        .filter(|t| !t.is_empty())
        .ok_or(CatalogError::MissingSearchTerm)?
        .to_lowercase();

    let results: Vec<Product> = products
        .into_iter()
        .filter(|p| p.fields.name.to_lowercase().contains(&term))
        .collect();

    Ok(SearchResults {
        total: results.len(),
        results,
    })
}

/// Count products per lowercased category.
pub fn category_stats(products: &[Product]) -> CategoryStats {
    let mut stats = IndexMap::new();
    for product in products {
        *stats.entry(product.category_key()).or_insert(0) += 1;
    }
    CategoryStats { stats }
}

/// Parse an id from a request path.
///
/// Anything that is not a UUID cannot name a stored product, so it is reported as not found.
pub fn parse_product_id(raw: &str) -> CatalogResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| CatalogError::ProductNotFound)
}

/// Fetch one product by its raw path id.
pub fn find_product(store: &ProductStore, raw_id: &str) -> CatalogResult<Product> {
    let id = parse_product_id(raw_id)?;
    Ok(store.get_by_id(id)?)
}
