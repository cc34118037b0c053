//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STRATEGY_DOCS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use strategy_docs::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default filter mode: {}", config.filter.default_mode);
//! ```

mod error;
mod filter;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use filter::FilterConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

use crate::domain::validation::ValidationPolicy;

const ENV_PREFIX: &str = "STRATEGY_DOCS";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Logging configuration (filter directive, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// How strictly validation findings are treated
    #[serde(default)]
    pub validation: ValidationPolicy,

    /// Tag filter defaults
    #[serde(default)]
    pub filter: FilterConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STRATEGY_DOCS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STRATEGY_DOCS__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `STRATEGY_DOCS__VALIDATION__WARNINGS_AS_ERRORS=true` -> `validation.warnings_as_errors = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The file format (TOML, YAML, JSON) is chosen from the extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or values
    /// cannot be parsed into expected types.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__")
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log filter directive is empty or malformed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}
