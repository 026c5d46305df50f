//! Main MxToolbox API client implementation.

use crate::api::LookupApi;
use mxtoolbox_core::{ApiKey, ApiResponse, MxError, QueryRequest, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;

/// The MxToolbox API base URL
pub const DEFAULT_BASE_URL: &str = "https://mxtoolbox.com";

/// Main MxToolbox API client
#[derive(Clone)]
pub struct MxToolboxClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: ApiKey,
    base_url: String,
}

impl MxToolboxClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: ApiKey) -> Result<Self> {
        MxToolboxClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: ApiKey) -> MxToolboxClientBuilder {
        MxToolboxClientBuilder::new(api_key)
    }

    /// Access typed lookup helpers
    #[must_use]
    pub fn lookup(&self) -> LookupApi<'_> {
        LookupApi::new(self)
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Run one lookup and return the raw body.
    ///
    /// The API key goes in the `Authorization` header, never the query
    /// string. Failures are not retried.
    pub async fn execute(&self, request: &QueryRequest) -> Result<ApiResponse> {
        let url = self.build_url(request)?;
        debug!(command = %request.command(), url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .header(AUTHORIZATION, self.inner.api_key.expose())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), response).await);
        }

        let body = response.text().await.map_err(transport_error)?;
        trace!(bytes = body.len(), "Response body read");

        Ok(ApiResponse::new(request.command(), body))
    }

    /// Build the request URL with encoded query parameters
    fn build_url(&self, request: &QueryRequest) -> Result<Url> {
        let raw = format!("{}{}", self.inner.base_url, request.path());

        Url::parse_with_params(&raw, request.params())
            .map_err(|e| MxError::InvalidUrl(format!("{raw}: {e}")))
    }
}

/// Convert an error response to an `MxError`
async fn error_from_response(status: u16, response: reqwest::Response) -> MxError {
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok());
    let body = response.text().await.unwrap_or_default();

    // Try to parse error message from JSON
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            ["Message", "error"]
                .iter()
                .find_map(|key| v.get(key).and_then(|e| e.as_str()).map(String::from))
        })
        .unwrap_or(body);

    match status {
        401 => MxError::Unauthorized,
        429 => {
            warn!("Rate limited by MxToolbox API");
            MxError::RateLimited { retry_after }
        }
        _ => MxError::Api {
            code: status,
            message,
        },
    }
}

fn transport_error(e: reqwest::Error) -> MxError {
    if e.is_timeout() {
        MxError::Timeout(e.to_string())
    } else if e.is_connect() {
        MxError::Connection(e.to_string())
    } else {
        MxError::Http(e.to_string())
    }
}

/// Builder for configuring a [`MxToolboxClient`]
pub struct MxToolboxClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl MxToolboxClientBuilder {
    /// Create a new builder with the given API key
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("mxapi/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout. Without one the transport default applies.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<MxToolboxClient> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| MxError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut http = HttpClient::builder()
            .user_agent(&self.user_agent)
            .gzip(true);

        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        let http = http.build().map_err(|e| MxError::Http(e.to_string()))?;

        Ok(MxToolboxClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                base_url,
            }),
        })
    }
}
