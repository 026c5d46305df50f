use serde::{Deserialize, Serialize};

use super::common::scalar_string;

/// `Result` value of a port the API found open
pub const OPEN: &str = "Open";

/// Response to a port `scan`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Host that was scanned
    #[serde(rename = "CommandArgument", deserialize_with = "scalar_string")]
    pub command_argument: String,

    /// Every probed port, whatever its state
    #[serde(rename = "Information")]
    pub information: Vec<PortProbe>,
}

impl ScanReport {
    /// Ports reported open; closed and filtered ones are skipped
    pub fn open_ports(&self) -> impl Iterator<Item = &PortProbe> {
        self.information.iter().filter(|p| p.is_open())
    }
}

/// State of one scanned port
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortProbe {
    /// Port state (`Open`, `Closed`, `Filtered`, ...)
    #[serde(rename = "Result", deserialize_with = "scalar_string")]
    pub result: String,

    /// Service name
    #[serde(rename = "Name", deserialize_with = "scalar_string")]
    pub name: String,

    /// Port number
    #[serde(rename = "Port", deserialize_with = "scalar_string")]
    pub port: String,
}

impl PortProbe {
    /// Returns true if the API reported the port open
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.result == OPEN
    }
}
