//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `lightctl.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.
//!
//! The motion timeout and the time-of-day boundaries are fixed by the
//! domain and intentionally absent here.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Poll loop settings.
    pub poller: PollerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Virtual motion sensor settings.
    pub motion: MotionConfig,
}

/// Poll loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Delay between two sensor reads, in milliseconds.
    pub interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Virtual motion sensor configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Toggle state before the first read. `false` makes the first read
    /// report motion.
    pub initial: bool,
}

impl Config {
    /// Load configuration from `lightctl.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("lightctl.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("LIGHTCTL_POLL_INTERVAL_MS") {
            if let Ok(ms) = val.parse() {
                self.poller.interval_ms = ms;
            }
        }
        if let Some(val) = var("LIGHTCTL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poller.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the poll interval as a [`Duration`].
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poller.interval_ms)
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lightctld=info,lightctl_app=info,lightctl_adapter_virtual=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.poller.interval_ms, 1000);
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert!(config.logging.filter.contains("lightctld=info"));
        assert!(!config.motion.initial);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.poller.interval_ms, 1000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [poller]
            interval_ms = 250

            [logging]
            filter = 'debug'

            [motion]
            initial = true
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.poller.interval_ms, 250);
        assert_eq!(config.logging.filter, "debug");
        assert!(config.motion.initial);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [motion]
            initial = true
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.motion.initial);
        assert_eq!(config.poller.interval_ms, 1000);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.poller.interval_ms, 1000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_zero_interval() {
        let mut config = Config::default();
        config.poller.interval_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_override_interval_from_env() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("LIGHTCTL_POLL_INTERVAL_MS", "500")]));
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
    }

    #[test]
    fn should_ignore_unparsable_interval_override() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("LIGHTCTL_POLL_INTERVAL_MS", "soon")]));
        assert_eq!(config.poller.interval_ms, 1000);
    }

    #[test]
    fn should_prefer_rust_log_over_lightctl_log() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("LIGHTCTL_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_keep_file_values_without_env() {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[]));
        assert_eq!(config.poller.interval_ms, 1000);
    }
}
