//! Text metrics service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::{require_http_url, ValidationError};

/// Where readability and keyword metrics come from.
#[derive(Debug, Clone, Deserialize)]
pub struct TextMetricsConfig {
    /// Base URL of the remote text-metrics service
    pub base_url: Option<String>,

    /// Compute metrics in-process when the remote service is absent or fails
    #[serde(default = "default_local_fallback")]
    pub local_fallback: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Resolved text-metrics backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMetricsMode {
    Remote { base_url: String, local_fallback: bool },
    Local,
    Disabled,
}

impl TextMetricsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn mode(&self) -> TextMetricsMode {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => TextMetricsMode::Remote {
                base_url: url.trim_end_matches('/').to_string(),
                local_fallback: self.local_fallback,
            },
            _ if self.local_fallback => TextMetricsMode::Local,
            _ => TextMetricsMode::Disabled,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidSectionTimeout("text_metrics"));
        }
        if let TextMetricsMode::Remote { base_url, .. } = self.mode() {
            require_http_url(&base_url, "text_metrics.base_url")?;
        }
        Ok(())
    }
}

impl Default for TextMetricsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            local_fallback: default_local_fallback(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_local_fallback() -> bool {
    true
}

fn default_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compute_locally() {
        let config = TextMetricsConfig::default();
        assert_eq!(config.mode(), TextMetricsMode::Local);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn base_url_selects_remote_service() {
        let config = TextMetricsConfig {
            base_url: Some("http://localhost:5000/".to_string()),
            local_fallback: false,
            ..Default::default()
        };
        assert_eq!(
            config.mode(),
            TextMetricsMode::Remote {
                base_url: "http://localhost:5000".to_string(),
                local_fallback: false,
            }
        );
    }

    #[test]
    fn blank_url_without_fallback_disables_metrics() {
        let config = TextMetricsConfig {
            base_url: Some("  ".to_string()),
            local_fallback: false,
            ..Default::default()
        };
        assert_eq!(config.mode(), TextMetricsMode::Disabled);
    }

    #[test]
    fn rejects_malformed_url() {
        let config = TextMetricsConfig {
            base_url: Some("localhost:5000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("text_metrics.base_url"))
        );
    }
}
