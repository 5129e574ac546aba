//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VIEWPOINT_DISCOVERY` prefix and nested values use double underscores as
//! separators. An optional file named by `VIEWPOINT_DISCOVERY_CONFIG` is read
//! first; environment variables override it.
//!
//! # Example
//!
//! ```no_run
//! use viewpoint_discovery::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Handoff timeout: {:?}", config.agent.handoff_timeout());
//! ```

mod agent;
mod error;
mod logging;

pub use agent::AgentConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an optional configuration file
pub const CONFIG_FILE_VAR: &str = "VIEWPOINT_DISCOVERY_CONFIG";

const ENV_PREFIX: &str = "VIEWPOINT_DISCOVERY";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Agent behaviour (handoff targets, limits)
    #[serde(default)]
    pub agent: AgentConfig,

    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the file named by `VIEWPOINT_DISCOVERY_CONFIG`, if set
    /// 3. Reads environment variables with `VIEWPOINT_DISCOVERY` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VIEWPOINT_DISCOVERY__AGENT__HANDOFF_TIMEOUT_SECS=30` -> `agent.handoff_timeout_secs = 30`
    /// - `VIEWPOINT_DISCOVERY__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values
    /// cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let file = std::env::var_os(CONFIG_FILE_VAR);
        Self::load_from(file.as_deref().map(Path::new))
    }

    /// Load configuration from an explicit file plus the environment
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
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
        self.agent.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("VIEWPOINT_DISCOVERY__AGENT__HANDOFF_TIMEOUT_SECS");
        env::remove_var("VIEWPOINT_DISCOVERY__AGENT__DEBATE_AGENT");
        env::remove_var("VIEWPOINT_DISCOVERY__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load_from(None);

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VIEWPOINT_DISCOVERY__AGENT__HANDOFF_TIMEOUT_SECS", "30");
        env::set_var("VIEWPOINT_DISCOVERY__AGENT__DEBATE_AGENT", "debate_v2");
        env::set_var("VIEWPOINT_DISCOVERY__LOGGING__FORMAT", "json");
        let result = AppConfig::load_from(None);
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.agent.handoff_timeout_secs, 30);
        assert_eq!(config.agent.debate_agent, "debate_v2");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[agent]\nwhiteboard_agent = \"board\"\ntopic_max_chars = 80").unwrap();

        let config = AppConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.agent.whiteboard_agent, "board");
        assert_eq!(config.agent.topic_max_chars, 80);
        assert_eq!(config.agent.topic_min_chars, 2);
    }

    #[test]
    fn test_environment_beats_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[agent]\nhandoff_timeout_secs = 90").unwrap();
        env::set_var("VIEWPOINT_DISCOVERY__AGENT__HANDOFF_TIMEOUT_SECS", "15");

        let result = AppConfig::load_from(Some(file.path()));
        clear_env();

        assert_eq!(result.unwrap().agent.handoff_timeout_secs, 15);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AppConfig::load_from(Some(Path::new("/nonexistent/viewpoint.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_agent_settings() {
        let config = AppConfig {
            agent: AgentConfig {
                handoff_timeout_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidHandoffTimeout));
    }
}
