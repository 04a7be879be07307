//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layer stack)
//!     → request.rs (assign request ID)
//!     → middleware/ (parse body → log → authenticate)
//!     → handlers.rs (catalog + store operations)
//!     → error.rs (any failure → status + {"error": ...})
//!     → Send to client
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use error::{ApiError, ApiResult};
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::ErrorBody;
pub use server::{AppState, HttpServer};
