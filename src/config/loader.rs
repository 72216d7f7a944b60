//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ServiceConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration: file (or defaults), then environment
/// overrides, then validation.
///
/// `PORT` rebinds the listener to `0.0.0.0:<port>`; `OSRM_URL` replaces the
/// upstream base URL. Both exist so the service can run without a config
/// file at all.
pub fn resolve_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(p) => load_config(p)?,
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut ServiceConfig) {
    match std::env::var("PORT") {
        Ok(port) if !port.is_empty() => {
            config.listener.bind_address = format!("0.0.0.0:{}", port);
        }
        _ => {
            tracing::info!(
                bind_address = %config.listener.bind_address,
                "No PORT environment variable detected, using configured listener"
            );
        }
    }

    if let Ok(url) = std::env::var("OSRM_URL") {
        if !url.is_empty() {
            config.osrm.base_url = url;
        }
    }
}
