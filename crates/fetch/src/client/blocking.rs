use std::time::Duration;

use exn::ResultExt;
use reqwest::blocking::Client;
use tracing::instrument;

use super::{HttpClient, Response};
use crate::error::{ErrorKind, Result};

/// Settings for [`ReqwestClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub user_agent: String,
    /// Total time allowed per request, including reading the body.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}
impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            user_agent: format!("hallen/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// [`HttpClient`] backed by a blocking [`reqwest`] client.
///
/// Must not be constructed or used from within an async runtime; the
/// blocking client spins up its own.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}
impl ReqwestClient {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .build()
            .or_raise(|| ErrorKind::Client("failed to build HTTP client".to_string()))?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}
impl TryFrom<&ClientOptions> for ReqwestClient {
    type Error = crate::error::Error;
    fn try_from(options: &ClientOptions) -> Result<Self> {
        Self::new(options)
    }
}

impl HttpClient for ReqwestClient {
    #[instrument(skip(self), fields(status))]
    fn get(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().or_raise(|| ErrorKind::Network(url.to_string()))?;
        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Non-success response; not reading body");
            return Ok(Response::new(status.as_u16(), String::new()));
        }
        let body = response.text().or_raise(|| ErrorKind::Network(url.to_string()))?;
        tracing::debug!(bytes = body.len(), "Received response body");
        Ok(Response::new(status.as_u16(), body))
    }
}
