//! Client configuration
//!
//! Defaults target the public Binance host with the HTTP stack's own
//! timeout behaviour. Both can be overridden from the environment.

use std::time::Duration;

use crate::binance::{BinanceError, BinanceResult};

/// Default Binance REST host
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

pub const ENV_BASE_URL: &str = "BINANCE_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "BINANCE_HTTP_TIMEOUT_SECS";

/// Strip surrounding whitespace and trailing slashes so `<base><path>`
/// joins with exactly one `/`.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load overrides from the process environment
    pub fn from_env() -> BinanceResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through `lookup`, falling back to defaults for unset
    /// or blank variables.
    pub fn from_lookup<F>(lookup: F) -> BinanceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = normalize_base_url(&base_url);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                BinanceError::Config(format!("{} must be whole seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
