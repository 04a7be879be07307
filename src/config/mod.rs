//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI/env overrides (port, api key) applied in main
//!     → ServiceConfig (validated, immutable)
//!     → cloned into the pieces of the HTTP pipeline that need it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the service runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    AuthConfig, LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, PaginationConfig,
    ServiceConfig,
};
pub use validation::validate_config;
