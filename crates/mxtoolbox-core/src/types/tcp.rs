use serde::{Deserialize, Serialize};

use super::common::scalar_string;

/// Response to a `tcp` probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpReport {
    /// Host that was probed, as echoed by the API
    #[serde(rename = "CommandArgument", deserialize_with = "scalar_string")]
    pub command_argument: String,

    /// Probe outcomes
    #[serde(rename = "Information")]
    pub information: Vec<TcpProbe>,
}

/// Outcome of one TCP connection attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpProbe {
    /// Human-readable result line
    #[serde(rename = "Summary", deserialize_with = "scalar_string")]
    pub summary: String,
}
