//! Application configuration module
//!
//! [`AppConfig`] holds the settings the client needs to reach the blog
//! backend. Values come from an optional TOML file and are overridden by the
//! builder (which the client feeds from environment variables).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the blog backend
    pub server_url: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// File holding the persisted session tokens
    pub token_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            let parsed = Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.clone()))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::MissingValue("request_timeout_secs"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    request_timeout_secs: Option<u64>,
    token_path: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Start from an existing configuration, e.g. one read from disk
    pub fn merge(mut self, base: AppConfig) -> Self {
        self.server_url = base.server_url.or(self.server_url);
        self.request_timeout_secs = base.request_timeout_secs.or(self.request_timeout_secs);
        self.token_path = base.token_path.or(self.token_path);
        self
    }

    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    pub fn token_path(mut self, path: PathBuf) -> Self {
        self.token_path = Some(path);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            request_timeout_secs: self.request_timeout_secs,
            token_path: self.token_path,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("failed to read config: {0}")]
    Io(String),
}
