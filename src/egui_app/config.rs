use std::path::PathBuf;
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the server URL
pub const API_URL_ENV: &str = "BLOG_API_URL";

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Load `config.toml` from the platform config directory (if present)
    /// and apply `BLOG_API_URL` on top.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();

        let file = config_dir().join("config.toml");
        if file.exists() {
            tracing::info!("[CONFIG] Reading {}", file.display());
            builder = builder.merge(AppConfig::from_file(&file)?);
        }

        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.server_url(url);
        }

        Self::with_builder(builder)
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url().trim_end_matches('/'), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.app.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// File the session tokens are persisted to
    pub fn token_path(&self) -> PathBuf {
        self.app
            .token_path
            .clone()
            .unwrap_or_else(|| config_dir().join("session.json"))
    }
}

fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
    path.push("lagerblogs");
    path
}
