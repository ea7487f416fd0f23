use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use url::Url;

use crate::provider::openmeteo::DEFAULT_ENDPOINT;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// endpoint = "https://api.open-meteo.com/v1"
/// log_level = "info"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Open-Meteo API; `/forecast` is appended.
    pub endpoint: Option<String>,

    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_level: Option<String>,
}

impl Config {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Replace the endpoint after checking it is an absolute http(s) URL.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        let endpoint = endpoint.trim();
        let url = Url::parse(endpoint)
            .with_context(|| format!("Invalid endpoint URL: {endpoint}"))?;

        if !matches!(url.scheme(), "http" | "https") {
            bail!("Endpoint must use http or https, got '{}'", url.scheme());
        }

        self.endpoint = Some(endpoint.to_string());
        Ok(())
    }

    pub fn set_log_level(&mut self, level: &str) {
        self.log_level = Some(level.trim().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "open-meteo-forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
