use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ConfigError::ReadError { .. } => "config_read_error",
            ConfigError::ParseError { .. } => "config_parse_error",
            ConfigError::ValidationError { .. } => "config_validation_error",
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/animal-votes/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory if there is none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("animal-votes").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `remote.base_url` is an absolute http(s) URL
    /// - `remote.resource` is a single non-empty path segment with no
    ///   surrounding whitespace
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.remote.base_url;
        let url = Url::parse(base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid base_url '{}': {}", base_url, e),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url '{}' must use http or https, not '{}'",
                    base_url,
                    url.scheme()
                ),
            });
        }

        let resource = &self.remote.resource;
        if resource.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "resource must not be empty".to_string(),
            });
        }
        if resource.trim() != resource {
            return Err(ConfigError::ValidationError {
                message: format!("resource '{}' must not have surrounding whitespace", resource),
            });
        }
        if resource.contains('/') {
            return Err(ConfigError::ValidationError {
                message: format!("resource '{}' must not contain '/'", resource),
            });
        }

        Ok(())
    }
}
