//! Configuration file structures for fib-runner.
//!
//! This module defines structures for TOML configuration files:
//! - [`ConfigFile`]: Top-level configuration file structure
//! - [`LogConfig`]: Log filter used when `RUST_LOG` is not set, and the
//!   output format

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::RunnerConfig;

/// Top-level configuration file structure.
///
/// # Example
///
/// ```toml
/// [calculator]
/// message_prefix = "Rust"
///
/// [sample]
/// count = 10
/// delay_ms = 500
/// host_label = "fib-runner"
///
/// [bench]
/// warmup = 10
/// iterations = 10
/// workload = "primes"
///
/// [log]
/// filter = "info,fib_runner=debug"
/// format = "text"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Calculator, sample and bench sections.
    #[serde(flatten)]
    pub runner: RunnerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        debug!(path = %path.display(), "Loaded config file");
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed as TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content).map_err(|e| ConfigFileError::Parse {
            message: e.to_string(),
        })
    }
}

/// Logging configuration from config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "defaults::log_filter")]
    pub filter: String,

    /// Output format of log lines.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: defaults::log_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Configuration file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config file: {message}")]
    Parse { message: String },
}

/// Default value functions for serde.
mod defaults {
    pub fn log_filter() -> String {
        "info,fib_runner=debug".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkloadKind;

    #[test]
    fn test_default_config_file() {
        let config = ConfigFile::default();

        assert_eq!(config.log.filter, "info,fib_runner=debug");
        assert_eq!(config.log.format, LogFormat::Text);
        assert!(config.runner.calculator.message_prefix.is_none());
        assert_eq!(config.runner.sample.count, 10);
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [sample]
            count = 3
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(config.runner.sample.count, 3);
        // Defaults applied
        assert_eq!(config.runner.sample.delay_ms, 500);
        assert_eq!(config.runner.bench.iterations, 10);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [calculator]
            message_prefix = "Rust"

            [sample]
            count = 5
            delay_ms = 0
            host_label = "host"

            [bench]
            warmup = 2
            iterations = 4
            workload = "fib"
            fib_n = 20
            primes_n = 100
            primes_expected = 547

            [log]
            filter = "warn"
            format = "json"
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(
            config.runner.calculator.message_prefix.as_deref(),
            Some("Rust")
        );
        assert_eq!(config.runner.sample.count, 5);
        assert_eq!(config.runner.sample.delay_ms, 0);
        assert_eq!(config.runner.sample.host_label, "host");
        assert_eq!(config.runner.bench.warmup, 2);
        assert_eq!(config.runner.bench.iterations, 4);
        assert_eq!(config.runner.bench.workload, WorkloadKind::Fib);
        assert_eq!(config.runner.bench.fib_n, 20);
        assert_eq!(config.runner.bench.primes_n, 100);
        assert_eq!(config.runner.bench.primes_expected, 547);
        assert_eq!(config.log.filter, "warn");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid = "this is not valid toml [";
        let result = ConfigFile::from_toml(invalid);
        assert!(matches!(result, Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let toml = r#"
            [log]
            format = "xml"
        "#;
        assert!(ConfigFile::from_toml(toml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigFile::from_file("/nonexistent/fib-runner.toml");
        assert!(matches!(result, Err(ConfigFileError::Io { .. })));
    }
}
