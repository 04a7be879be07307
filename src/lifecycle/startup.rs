//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration (file optional)
//! - Apply command-line / environment overrides
//! - Re-validate after overrides so a bad `--api-key` is still rejected

use std::path::PathBuf;

use crate::config::{load_config, validate_config, ConfigError, ServiceConfig};

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub api_key: Option<String>,
}

/// Produce the effective configuration.
pub fn resolve_config(overrides: Overrides) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &overrides.config_path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(port) = overrides.port {
        config.listener.port = port;
    }
    if let Some(api_key) = overrides.api_key {
        config.auth.api_key = api_key;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
