//! Entity storage subsystem.
//!
//! # Data Flow
//! ```text
//! create/update handlers
//!     → product.rs (ProductFields validated upstream, Product assembled here)
//!     → memory.rs (ordered in-memory sequence, serialized writes)
//!
//! read handlers
//!     → memory.rs (list_all snapshot)
//!     → catalog query engine
//! ```
//!
//! # Design Decisions
//! - Insertion order is preserved and observable in list/search results
//! - All mutations go through one write lock; reads clone a consistent snapshot
//! - Nothing is persisted; the store lives as long as the process

pub mod memory;
pub mod product;

pub use memory::{ProductStore, StoreError, StoreResult};
pub use product::{Product, ProductFields};
