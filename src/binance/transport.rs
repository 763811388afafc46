//! HTTP transport used by [`BinanceClient`](super::BinanceClient)
//!
//! The client only needs "GET this URL, give me the body". Keeping that
//! behind a trait lets tests substitute canned responses.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use super::error::{BinanceError, BinanceResult, TransportError};

/// Query parameters in request order. `None` marks an absent value.
pub type Query<'a> = [(&'a str, Option<String>)];

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET and return the response body, whatever the HTTP status.
    async fn get(&self, url: Url) -> Result<String, TransportError>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport. Without a timeout, reqwest's defaults apply.
    pub fn new(timeout: Option<Duration>) -> BinanceResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| BinanceError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(ReqwestTransport { client })
    }

    pub fn with_client(client: Client) -> Self {
        ReqwestTransport { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<String, TransportError> {
        let response = self.client.get(url).send().await?;
        Ok(response.text().await?)
    }
}

/// Join `base_url` and `path`, then form-encode the present query values.
///
/// The joined string goes through URL parsing, so `.`/`..` segments are
/// resolved before the request is sent.
///
/// Absent (`None`) values are dropped here, not by the caller. When nothing
/// survives no `?` is appended.
pub fn build_url(base_url: &str, path: &str, query: &Query<'_>) -> BinanceResult<Url> {
    let raw = format!("{}{}", base_url, path);
    let mut url = Url::parse(&raw).map_err(|e| BinanceError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    let mut present = query
        .iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
        .peekable();

    if present.peek().is_some() {
        url.query_pairs_mut().extend_pairs(present);
    }

    Ok(url)
}
