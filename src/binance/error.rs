//! Binance client error types

use serde_json::Value;

/// Error returned by an [`HttpTransport`](super::HttpTransport) implementation.
///
/// Boxed so that mocks and alternative HTTP stacks can report their own
/// failures; callers can `downcast_ref` to `reqwest::Error` when the default
/// transport is in use.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum BinanceError {
    /// The request never produced a response (DNS, connect, TLS, timeout, ...)
    #[error(transparent)]
    Network(TransportError),

    /// Transport succeeded but the response body was empty
    #[error("No body")]
    NoBody,

    /// Body was present but is not valid JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Exchange-reported failure: a JSON body carrying both `code` and `msg`
    #[error("{msg}")]
    Api { code: Value, msg: String },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BinanceError {
    /// Upstream error code, for [`BinanceError::Api`] only
    pub fn code(&self) -> Option<&Value> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// True when the transport itself failed. Callers that back off should
    /// key on this rather than on API errors.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

pub type BinanceResult<T> = Result<T, BinanceError>;
