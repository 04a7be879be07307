//! Products Service Library
//!
//! In-memory CRUD service for a "products" resource over HTTP.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Product, ProductFields, ProductStore};
