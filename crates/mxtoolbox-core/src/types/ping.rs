use serde::{Deserialize, Serialize};

use super::common::scalar_string;

/// HTML entity the API puts in front of sub-millisecond times
const LESS_THAN_ENTITY: &str = "&lt;";

/// Response to a `ping`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingReport {
    /// Host that was pinged
    #[serde(rename = "CommandArgument", deserialize_with = "scalar_string")]
    pub command_argument: String,

    /// One entry per echo request
    #[serde(rename = "Information")]
    pub information: Vec<PingReply>,
}

/// Result of a single echo request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingReply {
    /// Reply status
    #[serde(rename = "Reply", deserialize_with = "scalar_string")]
    pub reply: String,

    /// Address that answered
    #[serde(rename = "IP Address", deserialize_with = "scalar_string")]
    pub ip_address: String,

    /// Round-trip time as sent by the API, possibly entity-escaped
    #[serde(rename = "Time", deserialize_with = "scalar_string")]
    pub time: String,
}

impl PingReply {
    /// Round-trip time in milliseconds with `&lt;` markers removed
    #[must_use]
    pub fn time_ms(&self) -> String {
        self.time.replace(LESS_THAN_ENTITY, "")
    }
}
