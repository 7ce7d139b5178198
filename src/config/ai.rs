//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::{require_http_url, ValidationError};
use crate::adapters::ai::OpenAIConfig;

/// Key value shipped in sample `.env` files; treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key for the selected provider. Absent means AI judgment is disabled.
    pub api_key: Option<Secret<String>>,

    /// Which OpenAI-compatible endpoint preset to use
    #[serde(default)]
    pub provider: AiProvider,

    /// Overrides the preset's base URL
    pub base_url: Option<String>,

    /// Overrides the preset's model
    pub model: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

/// AI provider preset
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    OpenAI,
    #[default]
    Gemini,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when a usable key is configured.
    pub fn has_api_key(&self) -> bool {
        self.usable_key().is_some()
    }

    fn usable_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().trim())
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }

    /// Provider configuration, or `None` when AI judgment is disabled.
    pub fn provider_config(&self) -> Option<OpenAIConfig> {
        let key = self.usable_key()?;

        let mut config = match self.provider {
            AiProvider::OpenAI => OpenAIConfig::new(key),
            AiProvider::Gemini => OpenAIConfig::gemini(key),
        }
        .with_timeout(self.timeout())
        .with_max_retries(self.max_retries);

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        Some(config)
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidSectionTimeout("ai"));
        }
        if let Some(base_url) = &self.base_url {
            require_http_url(base_url, "ai.base_url")?;
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            provider: AiProvider::default(),
            base_url: None,
            model: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{GEMINI_MODEL, OPENAI_BASE_URL};

    fn with_key(key: &str) -> AiConfig {
        AiConfig {
            api_key: Some(Secret::new(key.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProvider::Gemini);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
        assert!(!config.has_api_key());
        assert!(config.provider_config().is_none());
    }

    #[test]
    fn test_placeholder_and_blank_keys_count_as_absent() {
        assert!(!with_key(PLACEHOLDER_API_KEY).has_api_key());
        assert!(!with_key("   ").has_api_key());
        assert!(with_key("real-key").has_api_key());
    }

    #[test]
    fn test_provider_config_uses_preset() {
        let gemini = with_key("k").provider_config().unwrap();
        assert_eq!(gemini.provider_name, "gemini");
        assert_eq!(gemini.model, GEMINI_MODEL);

        let openai = AiConfig {
            provider: AiProvider::OpenAI,
            ..with_key("k")
        }
        .provider_config()
        .unwrap();
        assert_eq!(openai.base_url, OPENAI_BASE_URL);
    }

    #[test]
    fn test_provider_config_applies_overrides() {
        let config = AiConfig {
            base_url: Some("http://localhost:8000/v1".to_string()),
            model: Some("local-model".to_string()),
            timeout_secs: 5,
            max_retries: 0,
            ..with_key("k")
        }
        .provider_config()
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000/v1");
        assert_eq!(config.model, "local-model");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_validation() {
        assert!(AiConfig::default().validate().is_ok());

        let config = AiConfig {
            base_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("ai.base_url"))
        );

        let config = AiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
