use serde::de::DeserializeOwned;

use super::{Command, Report};
use crate::{MxError, Result};

/// Raw body returned for one request, tagged with the command that asked for it
#[derive(Debug, Clone)]
pub struct ApiResponse {
    command: Command,
    body: String,
}

impl ApiResponse {
    /// Wrap a response body
    #[must_use]
    pub fn new(command: Command, body: impl Into<String>) -> Self {
        Self {
            command,
            body: body.into(),
        }
    }

    /// Command whose request produced this body
    #[must_use]
    pub const fn command(&self) -> Command {
        self.command
    }

    /// Raw response text
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Interpret the body with the schema of its own command
    pub fn report(&self) -> Result<Report> {
        Report::parse(self)
    }

    /// Decode the body into a specific schema, tagging failures with this
    /// response's command
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|source| MxError::Parse {
            command: self.command,
            source,
        })
    }
}
