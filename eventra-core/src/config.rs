//! Server configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `EVENTRA_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventraError, EventraResult};

static DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
static DEFAULT_LOG_LEVEL: &str = "info";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration at ~/.config/eventra/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EventraConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Default tracing filter, used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub cors_allow_any: bool,
}

impl Default for EventraConfig {
    fn default() -> Self {
        EventraConfig {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            cors_allow_any: true,
        }
    }
}

impl EventraConfig {
    pub fn config_path() -> EventraResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventraError::Config("Could not determine config directory".into()))?
            .join("eventra");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file is fine.
    pub fn load() -> EventraResult<Self> {
        let path = Self::config_path()?;
        Self::build(File::from(path).required(false), true)
    }

    /// Load from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> EventraResult<Self> {
        Self::build(File::from(path).required(true), true)
    }

    fn build<S>(file: S, with_env: bool) -> EventraResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut builder = Config::builder().add_source(file);
        if with_env {
            builder = builder.add_source(Environment::with_prefix("EVENTRA").try_parsing(true));
        }

        builder
            .build()
            .map_err(|e| EventraError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventraError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load_file(contents: &str) -> EventraResult<EventraConfig> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        EventraConfig::build(File::from(file.path()).required(true), false)
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(load_file("").unwrap(), EventraConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = load_file("port = 8080\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.cors_allow_any);
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let err = load_file("port = \"not a number\"\n").unwrap_err();
        assert!(matches!(err, EventraError::Config(_)));
    }

    #[test]
    fn test_missing_required_file() {
        let err = EventraConfig::load_from(Path::new("/nonexistent/eventra.toml")).unwrap_err();
        assert!(matches!(err, EventraError::Config(_)));
    }
}
