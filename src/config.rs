//! Configuration management for the address book demo.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the address book demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (default: "info")
    pub log_level: String,

    /// Log a summary after each rendering step (default: false)
    pub demo_verbose: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `ADDRESS_BOOK_DEMO_VERBOSE`: Log rendering summaries (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level("LOG_LEVEL", &val)?,
            Err(_) => Self::default().log_level,
        };
        let demo_verbose = Self::parse_env_bool("ADDRESS_BOOK_DEMO_VERBOSE", false)?;

        Ok(Config {
            log_level,
            demo_verbose,
        })
    }

    /// Normalize and check a log level name.
    fn parse_log_level(var_name: &str, val: &str) -> ConfigResult<String> {
        let level = val.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), val),
            })
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true/false/1/0, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            demo_verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.demo_verbose);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "DEBUG");
        guard.set("ADDRESS_BOOK_DEMO_VERBOSE", "1");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.demo_verbose);
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "loud");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LOG_LEVEL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL", "false");

        assert!(!Config::parse_env_bool("TEST_BOOL", true).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_INVALID", "maybe");

        assert!(Config::parse_env_bool("TEST_BOOL_INVALID", false).is_err());
    }
}
