//! In-memory product store.

use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

use crate::observability::metrics;
use crate::store::product::{seed_products, Product, ProductFields};

/// Errors raised by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No product carries the requested id.
    #[error("product {0} not found")]
    NotFound(Uuid),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered, process-wide collection of products.
///
/// Writers take the lock exclusively, so insert/replace/delete are serialized.
/// Readers get a cloned snapshot and never observe a half-applied mutation.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the startup records.
    pub fn seeded() -> Self {
        Self::from_products(seed_products())
    }

    /// Create a store from existing records, keeping their order.
    pub fn from_products(products: Vec<Product>) -> Self {
        metrics::record_store_size(products.len());
        Self {
            products: RwLock::new(products),
        }
    }

    /// Append a fully formed product and return it.
    pub fn insert(&self, product: Product) -> Product {
        let mut products = self.products.write();
        products.push(product.clone());
        metrics::record_store_size(products.len());
        tracing::debug!(id = %product.id, "Product inserted");
        product
    }

    /// Look up a product by id.
    pub fn get_by_id(&self, id: Uuid) -> StoreResult<Product> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrite every business field of the product with `id`, keeping the id.
    pub fn replace_by_id(&self, id: Uuid, fields: ProductFields) -> StoreResult<Product> {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;

        product.fields = fields;
        tracing::debug!(id = %id, "Product replaced");
        Ok(product.clone())
    }

    /// Remove the product with `id`.
    pub fn delete_by_id(&self, id: Uuid) -> StoreResult<()> {
        let mut products = self.products.write();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;

        products.remove(index);
        metrics::record_store_size(products.len());
        tracing::debug!(id = %id, "Product deleted");
        Ok(())
    }

    /// Snapshot of every product in insertion order.
    pub fn list_all(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }
}
