//! Binance public REST client
//!
//! Every method is a single GET. Bodies are classified by content only:
//! the HTTP status is never looked at, so a `{"code":..,"msg":..}` body is an
//! error even under 200 and any other JSON is a success even under 4xx.
//!
//! # Example
//! ```no_run
//! use binance_rest::BinanceClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BinanceClient::new();
//!     let klines = client.klines("BTCUSDT", "1h", None, None, Some(100)).await?;
//!     println!("{}", klines);
//!     Ok(())
//! }
//! ```

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

use super::error::{BinanceError, BinanceResult};
use super::transport::{build_url, HttpTransport, Query, ReqwestTransport};
use super::types::BinanceKline;
use super::{EXCHANGE_INFO_PATH, KLINES_PATH, TICKER_24HR_PATH};
use crate::config::{normalize_base_url, ClientConfig, DEFAULT_BASE_URL};

/// Binance API client
#[derive(Clone)]
pub struct BinanceClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BinanceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinanceClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl BinanceClient {
    /// Create a client for the public host with the default transport
    pub fn new() -> Self {
        BinanceClient {
            transport: Arc::new(ReqwestTransport::default()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_config(config: ClientConfig) -> BinanceResult<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(BinanceClient {
            transport: Arc::new(transport),
            base_url: normalize_base_url(&config.base_url),
        })
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        BinanceClient {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current exchange trading rules and symbol information
    pub async fn exchange_info(&self) -> BinanceResult<Value> {
        self.request(EXCHANGE_INFO_PATH, &[]).await
    }

    /// 24 hour rolling window price change statistics for one symbol.
    ///
    /// Failures are logged before being returned.
    pub async fn ticker_price_change(&self, symbol: &str) -> BinanceResult<Value> {
        self.request(TICKER_24HR_PATH, &[("symbol", Some(symbol.to_string()))])
            .await
            .inspect_err(|e| error!("24hr ticker for {} failed: {}", symbol, e))
    }

    /// Kline/candlestick bars for a symbol, as returned by the exchange.
    ///
    /// # Arguments
    /// * `symbol` - Binance trading pair (e.g., "BTCUSDT")
    /// * `interval` - Kline interval (e.g., "1h", "4h", "1d")
    /// * `start_time` - Optional start time in milliseconds
    /// * `end_time` - Optional end time in milliseconds
    /// * `limit` - Optional number of klines; the exchange applies its own
    ///   default and maximum
    pub async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        start_time: Option<i64>,
        end_time: Option<i64>,
        limit: Option<u32>,
    ) -> BinanceResult<Value> {
        let params = [
            ("symbol", Some(symbol.to_string())),
            ("interval", Some(interval.to_string())),
            ("startTime", start_time.map(|t| t.to_string())),
            ("endTime", end_time.map(|t| t.to_string())),
            ("limit", limit.map(|l| l.to_string())),
        ];

        self.request(KLINES_PATH, &params).await
    }

    /// Same request as [`klines`](Self::klines), parsed into [`BinanceKline`]s.
    /// Rows that don't match the kline layout are skipped.
    pub async fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        start_time: Option<i64>,
        end_time: Option<i64>,
        limit: Option<u32>,
    ) -> BinanceResult<Vec<BinanceKline>> {
        let value = self
            .klines(symbol, interval, start_time, end_time, limit)
            .await?;
        let raw_data: Vec<Vec<Value>> = serde_json::from_value(value)?;

        Ok(raw_data
            .iter()
            .filter_map(|row| BinanceKline::from_raw(row))
            .collect())
    }

    /// Common request: one GET to `<base_url><path>` with `query`.
    pub async fn request(&self, path: &str, query: &Query<'_>) -> BinanceResult<Value> {
        let url = build_url(&self.base_url, path, query)?;
        debug!("GET {}", url);

        let body = self
            .transport
            .get(url)
            .await
            .map_err(BinanceError::Network)?;

        parse_response(&body)
    }
}

/// Classify a response body.
pub fn parse_response(body: &str) -> BinanceResult<Value> {
    if body.is_empty() {
        return Err(BinanceError::NoBody);
    }

    let json: Value = serde_json::from_str(body)?;

    if let (Some(code), Some(msg)) = (json.get("code"), json.get("msg")) {
        if is_truthy(code) && is_truthy(msg) {
            let msg = match msg {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(BinanceError::Api {
                code: code.clone(),
                msg,
            });
        }
    }

    Ok(json)
}

/// Loose truthiness: `null`, `false`, zero and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = BinanceClient::new();
        assert_eq!(client.base_url(), "https://api.binance.com");

        let client = client.with_base_url("https://testnet.binance.vision");
        assert_eq!(client.base_url(), "https://testnet.binance.vision");
    }

    #[test]
    fn test_trailing_slash_base_url_is_trimmed() {
        let client = BinanceClient::new().with_base_url("https://testnet.binance.vision/");
        assert_eq!(client.base_url(), "https://testnet.binance.vision");

        let mut config = ClientConfig::default();
        config.base_url = "http://localhost:8080/".to_string();
        let client = BinanceClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_from_config() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080");
        let client = BinanceClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_success_passthrough() {
        let value = parse_response(r#"{"symbol":"BTCUSDT","price":"50000.00"}"#).unwrap();
        assert_eq!(value, json!({"symbol": "BTCUSDT", "price": "50000.00"}));

        let value = parse_response("[1,2,3]").unwrap();
        assert_eq!(value, json!([1, 2, 3]));

        let value = parse_response("42").unwrap();
        assert_eq!(value, json!(42));
    }

    #[test]
    fn test_parse_api_error() {
        let err = parse_response(r#"{"code":-1121,"msg":"Invalid symbol."}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid symbol.");
        assert_eq!(err.code(), Some(&json!(-1121)));
    }

    #[test]
    fn test_parse_api_error_with_string_code() {
        let err = parse_response(r#"{"code":"50011","msg":"Too Many Requests"}"#).unwrap_err();
        assert!(err.is_api());
        assert_eq!(err.code(), Some(&json!("50011")));
    }

    #[test]
    fn test_parse_partial_or_falsy_envelope_is_success() {
        for body in [
            r#"{"code":-1121}"#,
            r#"{"msg":"Invalid symbol."}"#,
            r#"{"code":0,"msg":"success"}"#,
            r#"{"code":-1,"msg":""}"#,
            r#"{"code":null,"msg":"x"}"#,
            r#"{}"#,
        ] {
            let expected: Value = serde_json::from_str(body).unwrap();
            assert_eq!(parse_response(body).unwrap(), expected, "body: {}", body);
        }
    }

    #[test]
    fn test_parse_empty_body() {
        let err = parse_response("").unwrap_err();
        assert!(matches!(err, BinanceError::NoBody));
        assert_eq!(err.to_string(), "No body");
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, BinanceError::Json(_)));
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
