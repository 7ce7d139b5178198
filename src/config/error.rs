//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid {0} timeout")]
    InvalidSectionTimeout(&'static str),

    #[error("Invalid URL for {0}: must be an absolute http(s) URL")]
    InvalidUrl(&'static str),

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Redirect limit exceeds maximum allowed (20)")]
    TooManyRedirects,

    #[error("User agent must not be empty")]
    EmptyUserAgent,
}

/// Checks that `value` is an absolute http or https URL.
pub(crate) fn require_http_url(value: &str, field: &'static str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::InvalidUrl(field)),
    }
}
