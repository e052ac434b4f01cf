//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.gfi-harvest.toml` files.

use crate::catalog::default_repositories;
use crate::models::RepositoryDescriptor;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".gfi-harvest.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// GitHub API settings.
    #[serde(default)]
    pub github: GitHubConfig,

    /// Repositories to harvest. Falls back to the built-in catalog when the
    /// key is missing; an explicit empty list harvests nothing.
    #[serde(default = "default_repositories")]
    pub repositories: Vec<RepositoryDescriptor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            github: GitHubConfig::default(),
            repositories: default_repositories(),
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Output document path.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Optional path for the last-update stamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            last_update_file: None,
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("public/issues.json")
}

/// GitHub API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Pause between repositories in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Personal access token for higher rate limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout(),
            delay_ms: default_delay_ms(),
            token: None,
        }
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_delay_ms() -> u64 {
    1000
}

impl GitHubConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Inter-repository pause as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from an optional location such as
    /// [`DEFAULT_CONFIG_FILE`].
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Ok(Some(Self::load(path)?))
        } else {
            Ok(None)
        }
    }

    /// Check values that may have come from the file rather than the CLI.
    pub fn validate(&self) -> Result<()> {
        let api_url = &self.github.api_url;
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            bail!("API URL must start with 'http://' or 'https://': {}", api_url);
        }

        if self.github.timeout_seconds == 0 {
            bail!("Timeout must be at least 1 second");
        }

        let output = &self.general.output;
        if output.as_os_str().is_empty() || output.is_dir() {
            bail!("Output must be a file path: {}", output.display());
        }

        if let Some(ref stamp) = self.general.last_update_file {
            if stamp.as_os_str().is_empty() || stamp.is_dir() {
                bail!("Last-update file must be a file path: {}", stamp.display());
            }
        }

        Ok(())
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings and only
    /// override when explicitly provided.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = output.clone();
        }
        if let Some(ref stamp) = args.last_update_file {
            self.general.last_update_file = Some(stamp.clone());
        }
        if let Some(ref api_url) = args.api_url {
            self.github.api_url = api_url.clone();
        }
        if let Some(timeout) = args.timeout {
            self.github.timeout_seconds = timeout;
        }
        if let Some(delay_ms) = args.delay_ms {
            self.github.delay_ms = delay_ms;
        }
        if let Some(ref token) = args.token {
            if !token.is_empty() {
                self.github.token = Some(token.clone());
            }
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
