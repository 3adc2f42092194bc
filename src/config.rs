//! Demo driver configuration read from the environment.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file via `dotenv`.

use std::env;

use thiserror::Error;

use crate::utils::logger::LogFormat;

pub const DEFAULT_SAMPLE_INPUT: i32 = 5;
pub const DEFAULT_UNKNOWN_FUNCTION: &str = "myFunction";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings for the demonstration binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Argument every stock function is applied to (`DEMO_INPUT`).
    pub sample_input: i32,
    /// Name resolved to exercise the error path (`DEMO_UNKNOWN_FUNCTION`).
    pub unknown_function: String,
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sample_input: DEFAULT_SAMPLE_INPUT,
            unknown_function: DEFAULT_UNKNOWN_FUNCTION.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl DemoConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Missing keys
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let sample_input = match lookup("DEMO_INPUT") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "DEMO_INPUT",
                    value: raw.clone(),
                })?,
            None => defaults.sample_input,
        };

        let unknown_function = lookup("DEMO_UNKNOWN_FUNCTION")
            .filter(|name| !name.is_empty())
            .unwrap_or(defaults.unknown_function);

        let log_format = lookup("LOG_FORMAT")
            .and_then(|raw| LogFormat::parse(&raw))
            .unwrap_or(defaults.log_format);

        Ok(Self {
            sample_input,
            unknown_function,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.sample_input, 5);
        assert_eq!(config.unknown_function, "myFunction");
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("DEMO_INPUT", " -3 "),
            ("DEMO_UNKNOWN_FUNCTION", "cube"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.sample_input, -3);
        assert_eq!(config.unknown_function, "cube");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let err = DemoConfig::from_lookup(lookup_from(&[("DEMO_INPUT", "five")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "DEMO_INPUT",
                value: "five".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid value for DEMO_INPUT: \"five\"");
    }

    #[test]
    fn test_unknown_log_format_falls_back_to_text() {
        let config = DemoConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).unwrap();
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
