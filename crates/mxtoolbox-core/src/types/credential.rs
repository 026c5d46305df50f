use std::fmt;

use crate::{MxError, Result};

/// MxToolbox API key, sent verbatim as the `Authorization` header
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Build a key from raw file contents.
    ///
    /// Exactly one trailing `\r\n` or `\n` is removed; everything else is
    /// kept as-is.
    pub fn from_contents(contents: impl Into<String>) -> Result<Self> {
        let mut key = contents.into();

        if key.ends_with("\r\n") {
            key.truncate(key.len() - 2);
        } else if key.ends_with('\n') {
            key.truncate(key.len() - 1);
        }

        if key.is_empty() {
            return Err(MxError::EmptyCredential);
        }

        Ok(Self(key))
    }

    /// The key as it goes on the wire
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
