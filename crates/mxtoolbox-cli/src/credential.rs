//! Credential loading.

use mxtoolbox::{ApiKey, MxError, Result};
use std::path::Path;
use tracing::debug;

/// Read the API key from `path`, dropping one trailing line ending.
pub fn load(path: &Path) -> Result<ApiKey> {
    debug!(path = %path.display(), "Reading API key");

    let contents = std::fs::read_to_string(path).map_err(|source| MxError::CredentialRead {
        path: path.to_path_buf(),
        source,
    })?;

    let key = ApiKey::from_contents(contents)?;
    debug!("API key loaded");

    Ok(key)
}
