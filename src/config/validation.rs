//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, retry budget >= 1)
//! - Check that addresses and the upstream URL actually parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    InvalidUpstreamUrl { url: String, reason: String },
    ZeroRequestTimeout,
    ZeroUpstreamTimeout,
    ZeroRetryAttempts,
    ZeroBaseDelay,
    MaxDelayBelowBase { base_ms: u64, max_ms: u64 },
    JitterOutOfRange(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address {:?} is not a valid socket address", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "observability.metrics_address {:?} is not a valid socket address", addr)
            }
            ValidationError::InvalidUpstreamUrl { url, reason } => {
                write!(f, "osrm.base_url {:?} is invalid: {}", url, reason)
            }
            ValidationError::ZeroRequestTimeout => {
                write!(f, "timeouts.request_secs must be greater than zero")
            }
            ValidationError::ZeroUpstreamTimeout => {
                write!(f, "osrm.timeout_secs must be greater than zero")
            }
            ValidationError::ZeroRetryAttempts => {
                write!(f, "retries.max_attempts must be at least 1")
            }
            ValidationError::ZeroBaseDelay => {
                write!(f, "retries.base_delay_ms must be greater than zero")
            }
            ValidationError::MaxDelayBelowBase { base_ms, max_ms } => {
                write!(
                    f,
                    "retries.max_delay_ms ({}) must not be below retries.base_delay_ms ({})",
                    max_ms, base_ms
                )
            }
            ValidationError::JitterOutOfRange(factor) => {
                write!(f, "retries.jitter_factor ({}) must be within [0.0, 1.0)", factor)
            }
        }
    }
}

/// Run all semantic checks; collects every violation found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    match Url::parse(&config.osrm.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.osrm.base_url.clone(),
            reason: format!("unsupported scheme {:?}", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.osrm.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.osrm.timeout_secs == 0 {
        errors.push(ValidationError::ZeroUpstreamTimeout);
    }

    if config.retries.max_attempts == 0 {
        errors.push(ValidationError::ZeroRetryAttempts);
    }

    if config.retries.base_delay_ms == 0 {
        errors.push(ValidationError::ZeroBaseDelay);
    }

    if config.retries.max_delay_ms < config.retries.base_delay_ms {
        errors.push(ValidationError::MaxDelayBelowBase {
            base_ms: config.retries.base_delay_ms,
            max_ms: config.retries.max_delay_ms,
        });
    }

    if !(0.0..1.0).contains(&config.retries.jitter_factor) {
        errors.push(ValidationError::JitterOutOfRange(config.retries.jitter_factor));
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
    fn default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn all_violations_are_collected() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.osrm.base_url = "ftp://router.project-osrm.org".into();
        config.retries.max_attempts = 0;
        config.retries.jitter_factor = 1.5;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroRetryAttempts));
        assert!(errors.contains(&ValidationError::JitterOutOfRange(1.5)));
    }

    #[test]
    fn max_delay_must_cover_base_delay() {
        let mut config = ServiceConfig::default();
        config.retries.base_delay_ms = 500;
        config.retries.max_delay_ms = 100;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::MaxDelayBelowBase { base_ms: 500, max_ms: 100 }]
        );
    }

    #[test]
    fn metrics_address_ignored_when_disabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "nonsense".into();

        assert!(validate_config(&config).is_ok());
    }
}
