//! Configuration management for noc-console
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_ENV, MAX_TIMEOUT_SECS};
use crate::models::{OnuTarget, TicketCategory, TicketPriority, TicketRequest};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub samples: SamplesConfig,
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend API, including the version prefix
    pub base_url: String,
    /// Environment variable holding the bearer token (unset = no auth header)
    pub token_env: String,
    /// Total request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

/// Targets used by the sample ONU lookup and sample ticket commands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
    pub olt_name: String,
    pub interface: String,
    pub ticket_query: String,
    pub ticket_description: String,
    /// LOW, MEDIUM or HIGH
    pub ticket_priority: String,
    pub ticket_category: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file under the data directory
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            olt_name: "OLT-SAMPLE".to_string(),
            interface: "1/2/3:4".to_string(),
            ticket_query: "Sample ticket query".to_string(),
            ticket_description: "This is a sample ticket created from the frontend".to_string(),
            ticket_priority: TicketPriority::Medium.to_string(),
            ticket_category: TicketCategory::Free.to_string(),
        }
    }
}

impl SamplesConfig {
    /// The ONU targeted by the sample lookup
    pub fn onu_target(&self) -> OnuTarget {
        OnuTarget::new(self.olt_name.clone(), self.interface.clone())
    }

    /// The ticket submitted by the sample ticket command
    pub fn ticket_request(&self) -> Result<TicketRequest> {
        let priority = self
            .ticket_priority
            .parse::<TicketPriority>()
            .map_err(|e| anyhow::anyhow!(e))?;

        Ok(TicketRequest::new(self.ticket_query.clone(), self.ticket_description.clone())
            .with_priority(priority)
            .with_category(TicketCategory::from(self.ticket_category.clone())))
    }
}

impl Config {
    /// Load configuration from file or return defaults, along with the file used
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file()? {
            Some(path) => Ok((Self::load_from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    pub fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("noc-console.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("noc-console").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }

        if self.api.token_env.trim().is_empty() {
            anyhow::bail!("api.token_env cannot be empty");
        }

        for (name, value) in [
            ("request_timeout_secs", self.api.request_timeout_secs),
            ("connect_timeout_secs", self.api.connect_timeout_secs),
        ] {
            if value == 0 || value > MAX_TIMEOUT_SECS {
                anyhow::bail!("api.{} must be between 1 and {} seconds, got {}", name, MAX_TIMEOUT_SECS, value);
            }
        }

        if self.samples.olt_name.trim().is_empty() {
            anyhow::bail!("samples.olt_name cannot be empty");
        }
        if self.samples.interface.trim().is_empty() {
            anyhow::bail!("samples.interface cannot be empty");
        }

        self.samples
            .ticket_request()
            .context("Invalid samples.ticket_priority")?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# noc-console Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("noc-console"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
