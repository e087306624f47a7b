//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STRESS_SCALE_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use stress_scale::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reports go to {}", config.export.output_dir.display());
//! ```

mod assessment;
mod error;
mod export;
mod logging;

pub use assessment::AssessmentConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report export (output directory, formats)
    #[serde(default)]
    pub export: ExportConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Interactive run settings
    #[serde(default)]
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `STRESS_SCALE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STRESS_SCALE__EXPORT__OUTPUT_DIR=./out` -> `export.output_dir = ./out`
    /// - `STRESS_SCALE__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STRESS_SCALE")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.export.validate()?;
        self.logging.validate()?;
        self.assessment.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 5] = [
        "STRESS_SCALE__EXPORT__OUTPUT_DIR",
        "STRESS_SCALE__EXPORT__FORMATS",
        "STRESS_SCALE__EXPORT__ENABLED",
        "STRESS_SCALE__LOGGING__LEVEL",
        "STRESS_SCALE__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("./reports"));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STRESS_SCALE__EXPORT__OUTPUT_DIR", "/tmp/stress-reports");
        env::set_var("STRESS_SCALE__EXPORT__FORMATS", "json,markdown");
        env::set_var("STRESS_SCALE__EXPORT__ENABLED", "false");
        env::set_var("STRESS_SCALE__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("/tmp/stress-reports"));
        assert_eq!(
            config.export.format_list().unwrap(),
            vec![ExportFormat::Json, ExportFormat::Markdown]
        );
        assert!(!config.export.enabled);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STRESS_SCALE__LOGGING__LEVEL", "stress_scale=loud");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }
}
