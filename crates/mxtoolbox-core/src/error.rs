use std::path::PathBuf;

use thiserror::Error;

use crate::types::Command;

/// Result type alias for MxToolbox operations
pub type Result<T> = std::result::Result<T, MxError>;

/// Exit code shared by every failure class.
pub const FAILURE_EXIT_CODE: u8 = 2;

/// Errors that can occur while running a lookup
#[derive(Error, Debug)]
pub enum MxError {
    /// Bad or missing command-line input
    #[error("invalid usage: {0}")]
    Usage(String),

    /// Configuration file could not be loaded
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential file missing or unreadable
    #[error("unable to read API key from {}: {source}", path.display())]
    CredentialRead {
        /// Path of the credential file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Credential file contained nothing but a line ending
    #[error("API key file is empty")]
    EmptyCredential,

    /// Authentication failed - invalid or missing API key
    #[error("authentication failed: invalid API key")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("rate limit exceeded, retry after {retry_after:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying
        retry_after: Option<u64>,
    },

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Response body did not match the schema of the command that requested it
    #[error("malformed `{command}` response: {source}")]
    Parse {
        /// Command whose schema was applied
        command: Command,
        /// Underlying JSON failure
        #[source]
        source: serde_json::Error,
    },

    /// Parsed result could not be written out
    #[error("failed to render `{command}` result: {message}")]
    Render {
        /// Command whose result was being rendered
        command: Command,
        /// What went wrong
        message: String,
    },
}

/// Coarse failure classes. Each one is terminal for the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad flags, unknown command or unusable configuration
    Usage,
    /// Credential file problems
    Credential,
    /// Network or HTTP failure
    Transport,
    /// Response body could not be interpreted
    Parse,
    /// Parsed result could not be written to the console
    Output,
}

impl MxError {
    /// The class this error belongs to
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Usage(_) | Self::Config(_) => ErrorClass::Usage,
            Self::CredentialRead { .. } | Self::EmptyCredential => ErrorClass::Credential,
            Self::Unauthorized
            | Self::RateLimited { .. }
            | Self::Api { .. }
            | Self::Http(_)
            | Self::Timeout(_)
            | Self::Connection(_)
            | Self::InvalidUrl(_) => ErrorClass::Transport,
            Self::Parse { .. } => ErrorClass::Parse,
            Self::Render { .. } => ErrorClass::Output,
        }
    }

    /// Short console message for this error. Full detail belongs in the log file.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self.class() {
            ErrorClass::Usage => "Invalid usage",
            ErrorClass::Credential => "Unable to read the API key",
            ErrorClass::Transport => "There was an error querying the API",
            ErrorClass::Parse => "There was an error parsing the returned data",
            ErrorClass::Output => "There was an error writing the result",
        }
    }

    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
