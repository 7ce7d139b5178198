//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `STARTUP_BOOST` prefix
//! and `__` between nested keys. Every section has defaults, so an empty
//! environment yields a working development setup with AI judgment disabled.
//!
//! # Example
//!
//! ```no_run
//! use startup_boost::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod fetch;
mod server;
mod text_metrics;

pub use ai::{AiConfig, AiProvider, PLACEHOLDER_API_KEY};
pub use error::{ConfigError, ValidationError};
pub use fetch::FetchConfig;
pub use server::{Environment, ServerConfig};
pub use text_metrics::{TextMetricsConfig, TextMetricsMode};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (OpenAI-compatible endpoint)
    #[serde(default)]
    pub ai: AiConfig,

    /// Readability/keyword metrics source
    #[serde(default)]
    pub text_metrics: TextMetricsConfig,

    /// Page fetch policy
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STARTUP_BOOST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `STARTUP_BOOST__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `STARTUP_BOOST__AI__API_KEY=...` -> `ai.api_key = ...`
    /// - `STARTUP_BOOST__TEXT_METRICS__BASE_URL=...` -> `text_metrics.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STARTUP_BOOST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for out-of-range ports or timeouts and
    /// malformed service URLs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.text_metrics.validate()?;
        self.fetch.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
