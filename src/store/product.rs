//! Product model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The business fields of a product, everything except its id.
///
/// Only the validator produces these from untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// A stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned at creation, never changes.
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl Product {
    /// Create a product with a freshly generated id.
    pub fn new(fields: ProductFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            fields,
        }
    }

    /// Category folded to lowercase, the form used for filtering and grouping.
    pub fn category_key(&self) -> String {
        self.fields.category.to_lowercase()
    }
}

/// Records present at startup.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(ProductFields {
            name: "Laptop".to_string(),
            description: "A high-performance laptop".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        }),
        Product::new(ProductFields {
            name: "Shoes".to_string(),
            description: "Comfortable running shoes".to_string(),
            price: 60.0,
            category: "fashion".to_string(),
            in_stock: false,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_flat_camel_case() {
        let product = Product::new(ProductFields {
            name: "Hat".into(),
            description: "Warm".into(),
            price: 20.0,
            category: "Fashion".into(),
            in_stock: true,
        });

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], product.id.to_string());
        assert_eq!(value["name"], "Hat");
        assert_eq!(value["price"], 20.0);
        assert_eq!(value["inStock"], true);
        assert!(value.get("fields").is_none());
        assert!(value.get("in_stock").is_none());
    }

    #[test]
    fn test_category_key_is_lowercase() {
        let product = Product::new(ProductFields {
            name: "TV".into(),
            description: "Big".into(),
            price: 500.0,
            category: "ElecTronics".into(),
            in_stock: true,
        });
        assert_eq!(product.category_key(), "electronics");
    }

    #[test]
    fn test_seed_ids_are_distinct() {
        let seeds = seed_products();
        assert_eq!(seeds.len(), 2);
        assert_ne!(seeds[0].id, seeds[1].id);
        assert_eq!(seeds[0].fields.name, "Laptop");
        assert_eq!(seeds[1].fields.category, "fashion");
    }
}
