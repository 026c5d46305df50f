use serde::Serialize;

use super::{ApiResponse, BlacklistReport, LookupReport, PingReport, ScanReport, TcpReport};
use crate::{MxError, Result};

/// A parsed response, one variant per response shape
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// `a` and `ptr`
    Lookup(LookupReport),
    /// `tcp`
    Tcp(TcpReport),
    /// `blacklist`
    Blacklist(BlacklistReport),
    /// `ping`
    Ping(PingReport),
    /// `scan`
    Scan(ScanReport),
}

impl Report {
    /// Parse a response body using the schema registered for its command.
    ///
    /// Missing top-level or per-record fields are reported as
    /// [`MxError::Parse`].
    pub fn parse(response: &ApiResponse) -> Result<Self> {
        let command = response.command();
        (command.endpoint().parse)(response.body())
            .map_err(|source| MxError::Parse { command, source })
    }

    pub(crate) fn parse_lookup(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body).map(Self::Lookup)
    }

    pub(crate) fn parse_tcp(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body).map(Self::Tcp)
    }

    pub(crate) fn parse_blacklist(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body).map(Self::Blacklist)
    }

    pub(crate) fn parse_ping(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body).map(Self::Ping)
    }

    pub(crate) fn parse_scan(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body).map(Self::Scan)
    }
}
