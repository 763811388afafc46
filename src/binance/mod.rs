//! Binance public REST API client
//! No API key needed for public market data endpoints.

mod client;
mod error;
pub mod transport;
mod types;

pub use client::{parse_response, BinanceClient};
pub use error::{BinanceError, BinanceResult, TransportError};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::*;

pub const EXCHANGE_INFO_PATH: &str = "/api/v3/exchangeInfo";
pub const TICKER_24HR_PATH: &str = "/api/v3/ticker/24hr";
pub const KLINES_PATH: &str = "/api/v3/klines";
