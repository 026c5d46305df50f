//! Command implementations.

pub mod lookup;

use mxtoolbox::{ApiKey, MxToolboxClient, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Settings;
use crate::credential;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// File holding the API key
    pub key_file: PathBuf,

    /// API base URL
    pub base_url: String,

    /// Request timeout, if any
    pub timeout: Option<Duration>,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    pub fn new(settings: &Settings) -> Self {
        Self {
            key_file: settings.key_file.clone(),
            base_url: settings.base_url.clone(),
            timeout: settings.timeout,
            output_format: settings.output_format,
        }
    }

    /// Load the API key from the configured file.
    pub fn api_key(&self) -> Result<ApiKey> {
        credential::load(&self.key_file)
    }

    /// Create an MxToolbox client with the configured API key.
    pub fn client(&self) -> Result<MxToolboxClient> {
        let mut builder = MxToolboxClient::builder(self.api_key()?).base_url(&self.base_url);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build()
    }
}
