//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::args::Cli;
use crate::output::OutputFormat;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "MXAPI_CONFIG";

/// Environment variable naming the log file, read by `--log-file` too.
pub const LOG_FILE_ENV: &str = "MXAPI_LOG_FILE";

/// Default credential file, relative to the working directory.
pub const DEFAULT_KEY_FILE: &str = "apikey.txt";

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "mxapi.log";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File holding the API key.
    pub key_file: Option<PathBuf>,

    /// File receiving trace-level diagnostics.
    pub log_file: Option<PathBuf>,

    /// API base URL.
    pub base_url: Option<String>,

    /// Request timeout in seconds. Unset means the transport default.
    pub timeout_secs: Option<u64>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("com", "mxtoolbox", "mxapi")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Effective settings for one invocation.
///
/// Command-line flags (and their environment variables) win over the config
/// file, which wins over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub key_file: PathBuf,
    pub log_file: PathBuf,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        Self {
            key_file: cli
                .key_file
                .clone()
                .or(config.key_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY_FILE)),
            log_file: cli
                .log_file
                .clone()
                .or(config.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            base_url: cli
                .base_url
                .clone()
                .or(config.base_url)
                .unwrap_or_else(|| mxtoolbox::DEFAULT_BASE_URL.to_string()),
            timeout: cli
                .timeout
                .or(config.timeout_secs)
                .map(Duration::from_secs),
            output_format: cli
                .format
                .or(config.output_format)
                .unwrap_or_default(),
            verbose: cli.verbose,
        }
    }
}
