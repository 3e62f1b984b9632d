//! Application configuration.
//!
//! Defaults are embedded from `config/app.toml` at compile time. The backend base
//! URL can be overridden at build time with `SWINGPRO_API_BASE`.

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("../config/app.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Base URL of the analysis backend, without a trailing slash.
    pub api_base_url: String,
    /// `tracing` filter directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Lowercase file extensions accepted by the upload form.
    #[serde(default = "default_extensions")]
    pub allowed_video_extensions: Vec<String>,
    /// Upload size limit in megabytes.
    #[serde(default = "default_max_video_mb")]
    pub max_video_mb: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_extensions() -> Vec<String> {
    ["mp4", "avi", "mov", "mkv"].iter().map(|s| s.to_string()).collect()
}

fn default_max_video_mb() -> u32 {
    200
}

impl AppConfig {
    /// Parse a config document and normalize it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(content)?;
        config.normalize()?;
        Ok(config)
    }

    /// The embedded defaults plus any build-time override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;
        if let Some(base) = option_env!("SWINGPRO_API_BASE") {
            config.api_base_url = base.to_string();
            config.normalize()?;
        }
        Ok(config)
    }

    pub fn max_video_bytes(&self) -> u64 {
        u64::from(self.max_video_mb) * 1024 * 1024
    }

    fn normalize(&mut self) -> Result<(), ConfigError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid("api_base_url must not be empty".to_string()));
        }
        self.api_base_url = trimmed.to_string();

        self.allowed_video_extensions = self
            .allowed_video_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        if self.allowed_video_extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "allowed_video_extensions must list at least one extension".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5001".to_string(),
            log_level: default_log_level(),
            allowed_video_extensions: default_extensions(),
            max_video_mb: default_max_video_mb(),
        }
    }
}
