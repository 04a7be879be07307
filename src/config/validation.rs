//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (page/limit defaults > 0, body limit > 0)
//! - Check the auth header is a legal HTTP header name
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("auth.api_key must not be empty")]
    EmptyApiKey,

    #[error("auth.header '{0}' is not a valid HTTP header name")]
    InvalidAuthHeader(String),

    #[error("pagination.{0} must be at least 1")]
    ZeroPagination(&'static str),

    #[error("limits.max_body_bytes must be greater than 0")]
    ZeroBodyLimit,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check the configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.auth.api_key.is_empty() {
        errors.push(ValidationError::EmptyApiKey);
    }
    if HeaderName::from_bytes(config.auth.header.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidAuthHeader(config.auth.header.clone()));
    }
    if config.pagination.default_page == 0 {
        errors.push(ValidationError::ZeroPagination("default_page"));
    }
    if config.pagination.default_limit == 0 {
        errors.push(ValidationError::ZeroPagination("default_limit"));
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.auth.api_key.clear();
        config.auth.header = "bad header".into();
        config.pagination.default_limit = 0;
        config.limits.max_body_bytes = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyApiKey,
                ValidationError::InvalidAuthHeader("bad header".into()),
                ValidationError::ZeroPagination("default_limit"),
                ValidationError::ZeroBodyLimit,
            ]
        );
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidMetricsAddress("nowhere".into())]
        );
    }
}
