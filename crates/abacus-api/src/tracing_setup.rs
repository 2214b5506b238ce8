//! Structured logging setup
//!
//! Installs a `tracing-subscriber` formatter writing to stderr, so that the
//! `eval` subcommand keeps stdout for its result.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human readable output for development.
    Pretty,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => f.write_str("json"),
            LogFormat::Pretty => f.write_str("pretty"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(anyhow!("unknown log format '{other}', expected 'json' or 'pretty'")),
        }
    }
}

/// Builds the event filter: `RUST_LOG` when set, the configured directives otherwise.
pub fn build_filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .with_context(|| format!("Invalid log filter '{}'", config.filter))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_target(false)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    }
    .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn log_format_displays_as_config_value() {
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
        assert_eq!(LogFormat::default().to_string(), "json");
    }

    #[test]
    fn configured_filter_is_accepted() {
        let config = LoggingConfig::default();
        assert!(build_filter(&config).is_ok());
    }
}
