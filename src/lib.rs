//! Binance public REST client
//!
//! A thin async wrapper over three public market data routes:
//! exchange info, 24 hour ticker statistics and klines. Each call is a
//! single GET whose JSON body is returned untouched, or classified as an
//! error when it is empty, malformed, or carries the exchange's
//! `{"code": .., "msg": ..}` envelope.
//!
//! No signing, no retries, no rate limiting and no caching.
//!
//! ```no_run
//! use binance_rest::{BinanceClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BinanceClient::with_config(ClientConfig::from_env()?)?;
//!     let ticker = client.ticker_price_change("BTCUSDT").await?;
//!     println!("Last price: {}", ticker["lastPrice"]);
//!     Ok(())
//! }
//! ```

pub mod binance;
pub mod config;

pub use binance::{BinanceClient, BinanceError, BinanceResult};
pub use config::ClientConfig;
