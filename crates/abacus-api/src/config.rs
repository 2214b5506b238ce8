use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::tracing_setup::LogFormat;

const DEFAULT_CONFIG_PATH: &str = "abacus.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), enable_cors: true }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_body_size_kb: default_max_body_size_kb() }
    }
}

impl LimitsConfig {
    pub fn max_body_size_bytes(&self) -> usize {
        self.max_body_size_kb.saturating_mul(1024)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: LogFormat::default(), filter: default_log_filter() }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AbacusConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AbacusConfig {
    /// Loads the file named by `ABACUS_CONFIG_PATH` (default `abacus.toml`) and
    /// applies environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("ABACUS_CONFIG_PATH")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Ok(Self::load_from(&config_path)?.apply_env_overrides())
    }

    /// Reads a TOML file. A missing file yields the defaults; an unreadable or
    /// malformed one is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents)
                .with_context(|| format!("Failed to parse configuration file '{}'", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "Configuration file '{}' not found. Using default configuration.",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(err) => Err(err)
                .with_context(|| format!("Failed to read configuration file '{}'", path.display())),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `ABACUS_HOST`, `ABACUS_PORT` and `ABACUS_LOG_FORMAT` as returned by
    /// `lookup`. Unparseable values are ignored with a warning.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("ABACUS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ABACUS_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(value = %port, "Ignoring invalid ABACUS_PORT"),
            }
        }
        if let Some(format) = lookup("ABACUS_LOG_FORMAT") {
            match format.parse::<LogFormat>() {
                Ok(format) => self.logging.format = format,
                Err(err) => warn!(value = %format, error = %err, "Ignoring invalid ABACUS_LOG_FORMAT"),
            }
        }

        self
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_true() -> bool {
    true
}
fn default_max_body_size_kb() -> usize {
    16
}
fn default_log_filter() -> String {
    "abacus=info,abacus_api=info,abacus_calculator=info,tower_http=info".to_string()
}
