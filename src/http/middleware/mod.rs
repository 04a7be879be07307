//! Request pipeline steps, applied to every request in this order:
//!
//! ```text
//! body.rs     parse JSON body        (400 malformed, 413 too large)
//! logging.rs  log method/path/id     (always passes)
//! auth.rs     check shared API key   (401 on mismatch)
//! → router → handler
//! ```
//!
//! A failing step returns an [`ApiError`](crate::http::error::ApiError); later
//! steps and the handler never run.

pub mod auth;
pub mod body;
pub mod logging;

pub use auth::require_api_key;
pub use body::parse_json_body;
pub use logging::log_request;
