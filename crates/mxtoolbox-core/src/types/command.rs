use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Report;
use crate::MxError;

/// Path prefix shared by every lookup endpoint
pub const LOOKUP_PATH: &str = "/api/v1/Lookup";

/// A supported MxToolbox lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// DNS A record lookup
    A,
    /// Reverse (PTR) lookup
    Ptr,
    /// TCP connect probe, optionally on a specific port
    Tcp,
    /// Blacklist check
    Blacklist,
    /// ICMP ping
    Ping,
    /// Common-port scan
    Scan,
}

/// How a command is requested and how its response is read.
///
/// Request shape and response shape live in the same row so they cannot
/// drift apart.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// Name used on the command line and as the final path segment
    pub name: &'static str,
    /// Whether the modifier is sent as a `port` query parameter
    pub accepts_port: bool,
    /// Schema applied to the response body
    pub parse: fn(&str) -> serde_json::Result<Report>,
}

impl Command {
    /// Every supported command, in usage order
    pub const ALL: [Self; 6] = [
        Self::A,
        Self::Ptr,
        Self::Tcp,
        Self::Blacklist,
        Self::Ping,
        Self::Scan,
    ];

    /// Dispatch table entry for this command
    #[must_use]
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::A => Endpoint {
                name: "a",
                accepts_port: false,
                parse: Report::parse_lookup,
            },
            Self::Ptr => Endpoint {
                name: "ptr",
                accepts_port: false,
                parse: Report::parse_lookup,
            },
            Self::Tcp => Endpoint {
                name: "tcp",
                accepts_port: true,
                parse: Report::parse_tcp,
            },
            Self::Blacklist => Endpoint {
                name: "blacklist",
                accepts_port: false,
                parse: Report::parse_blacklist,
            },
            Self::Ping => Endpoint {
                name: "ping",
                accepts_port: false,
                parse: Report::parse_ping,
            },
            Self::Scan => Endpoint {
                name: "scan",
                accepts_port: false,
                parse: Report::parse_scan,
            },
        }
    }

    /// Command-line and API name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.endpoint().name
    }

    /// Whether a modifier is forwarded as `port`
    #[must_use]
    pub const fn accepts_port(self) -> bool {
        self.endpoint().accepts_port
    }

    /// Request path relative to the API base URL
    #[must_use]
    pub fn path(self) -> String {
        format!("{LOOKUP_PATH}/{}", self.as_str())
    }
}

impl FromStr for Command {
    type Err = MxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                MxError::Usage(format!(
                    "unknown command `{s}` (expected one of: {})",
                    names.join(", ")
                ))
            })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
