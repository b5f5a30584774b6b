//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! The base URL lives here and is passed explicitly into the service
//! adapter at startup; there is no global environment singleton.

use quiz_application::GameConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("api.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("game.timer_period_seconds cannot be 0")]
    InvalidTimerPeriod,

    #[error("game.tick_interval_ms cannot be 0")]
    InvalidTickInterval,
}

/// Raw API configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the quiz service
    pub base_url: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://codechallenge.arctouch.com".to_string(),
        }
    }
}

/// Raw game configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Countdown period for one round, in seconds
    pub timer_period_seconds: i64,
    /// Tick cadence in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            timer_period_seconds: 300,
            tick_interval_ms: 1000,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz service settings
    pub api: FileApiConfig,
    /// Game settings
    pub game: FileGameConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.game.timer_period_seconds <= 0 {
            return Err(ConfigValidationError::InvalidTimerPeriod);
        }
        if self.game.tick_interval_ms == 0 {
            return Err(ConfigValidationError::InvalidTickInterval);
        }
        Ok(())
    }

    /// Convert the game section into the application-level config
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_timer_period_seconds(self.game.timer_period_seconds)
            .with_tick_interval(Duration::from_millis(self.game.tick_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.api.base_url, "https://codechallenge.arctouch.com");
        assert_eq!(config.game.timer_period_seconds, 300);
        assert_eq!(config.game.tick_interval_ms, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "https://quiz.example.com"

[game]
timer_period_seconds = 120
tick_interval_ms = 500
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://quiz.example.com");
        assert_eq!(config.game.timer_period_seconds, 120);
        assert_eq!(config.game.tick_interval_ms, 500);
    }

    #[test]
    fn test_deserialize_partial_config_applies_defaults() {
        let toml_str = r#"
[game]
timer_period_seconds = 60
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.timer_period_seconds, 60);
        // Defaults should apply
        assert_eq!(config.game.tick_interval_ms, 1000);
        assert_eq!(config.api.base_url, "https://codechallenge.arctouch.com");
    }

    #[test]
    fn test_validate_empty_base_url() {
        let toml_str = r#"
[api]
base_url = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyBaseUrl)
        ));
    }

    #[test]
    fn test_validate_zero_timer_period() {
        let toml_str = r#"
[game]
timer_period_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimerPeriod)
        ));
    }

    #[test]
    fn test_validate_overridden_negative_timer_period() {
        // Callers may write the period directly (e.g. a CLI override);
        // validation still has to reject it.
        let mut config = FileConfig::default();
        config.game.timer_period_seconds = -5;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimerPeriod)
        ));
    }

    #[test]
    fn test_game_config_conversion() {
        let config = FileConfig::default();
        let game = config.game_config();
        assert_eq!(game.timer_period_seconds, 300);
        assert_eq!(game.tick_interval, Duration::from_secs(1));
    }
}
