use serde::{Deserialize, Serialize};

use super::common::scalar_string;

/// Response to a `blacklist` check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistReport {
    /// Domain or IP that was checked
    #[serde(rename = "CommandArgument", deserialize_with = "scalar_string")]
    pub command_argument: String,

    /// Blacklists the target is listed on
    #[serde(rename = "Failed")]
    pub failed: Vec<Blacklisting>,
}

impl BlacklistReport {
    /// Number of blacklists the target appears on
    #[must_use]
    pub fn listed_count(&self) -> usize {
        self.failed.len()
    }

    /// Returns true if the target is on no blacklist at all
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A blacklist that reported the target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blacklisting {
    /// Blacklist name
    #[serde(rename = "Name", deserialize_with = "scalar_string")]
    pub name: String,
}
