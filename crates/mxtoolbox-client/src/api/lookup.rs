//! Typed helpers over the `/api/v1/Lookup` endpoints.

use crate::MxToolboxClient;
use mxtoolbox_core::{
    BlacklistReport, Command, LookupReport, PingReport, QueryRequest, Result, ScanReport,
    TcpReport,
};

/// Lookup API endpoints
pub struct LookupApi<'a> {
    client: &'a MxToolboxClient,
}

impl<'a> LookupApi<'a> {
    pub(crate) fn new(client: &'a MxToolboxClient) -> Self {
        Self { client }
    }

    /// DNS A records for a domain
    pub async fn a(&self, domain: &str) -> Result<LookupReport> {
        self.client
            .execute(&QueryRequest::new(Command::A, domain, None))
            .await?
            .decode()
    }

    /// Reverse (PTR) records for an IP address
    pub async fn ptr(&self, ip: &str) -> Result<LookupReport> {
        self.client
            .execute(&QueryRequest::new(Command::Ptr, ip, None))
            .await?
            .decode()
    }

    /// Blacklists a domain or IP is listed on
    pub async fn blacklist(&self, target: &str) -> Result<BlacklistReport> {
        self.client
            .execute(&QueryRequest::new(Command::Blacklist, target, None))
            .await?
            .decode()
    }

    /// Ping a host
    pub async fn ping(&self, host: &str) -> Result<PingReport> {
        self.client
            .execute(&QueryRequest::new(Command::Ping, host, None))
            .await?
            .decode()
    }

    /// Scan the common ports of a host
    pub async fn scan(&self, host: &str) -> Result<ScanReport> {
        self.client
            .execute(&QueryRequest::new(Command::Scan, host, None))
            .await?
            .decode()
    }

    /// Probe a TCP service on a host
    #[must_use]
    pub fn tcp(&self, host: impl Into<String>) -> TcpProbeBuilder<'a> {
        TcpProbeBuilder::new(self.client, host.into())
    }
}

/// Builder for TCP probe requests
pub struct TcpProbeBuilder<'a> {
    client: &'a MxToolboxClient,
    host: String,
    port: Option<String>,
}

impl<'a> TcpProbeBuilder<'a> {
    const fn new(client: &'a MxToolboxClient, host: String) -> Self {
        Self {
            client,
            host,
            port: None,
        }
    }

    /// Port to probe; the API picks its default when unset
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port.to_string());
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<TcpReport> {
        let request = QueryRequest::new(Command::Tcp, self.host, self.port);
        self.client.execute(&request).await?.decode()
    }
}
