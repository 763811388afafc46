//! Typed views over raw Binance payloads
//!
//! The client hands back `serde_json::Value` as-is. These helpers are for
//! callers who want structured klines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Binance kline/candlestick data
/// API returns an array: [open_time, open, high, low, close, volume, close_time,
///                        quote_volume, trades, taker_buy_base, taker_buy_quote, ignore]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinanceKline {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: i64,
    pub quote_volume: f64,
    pub trades: u64,
    pub taker_buy_base: f64,
    pub taker_buy_quote: f64,
}

impl BinanceKline {
    /// Parse one row of a `/api/v3/klines` response
    pub fn from_raw(raw: &[serde_json::Value]) -> Option<Self> {
        if raw.len() < 11 {
            return None;
        }

        Some(BinanceKline {
            open_time: raw[0].as_i64()?,
            open: raw[1].as_str()?.parse().ok()?,
            high: raw[2].as_str()?.parse().ok()?,
            low: raw[3].as_str()?.parse().ok()?,
            close: raw[4].as_str()?.parse().ok()?,
            volume: raw[5].as_str()?.parse().ok()?,
            close_time: raw[6].as_i64()?,
            quote_volume: raw[7].as_str()?.parse().ok()?,
            trades: raw[8].as_u64()?,
            taker_buy_base: raw[9].as_str()?.parse().ok()?,
            taker_buy_quote: raw[10].as_str()?.parse().ok()?,
        })
    }

    pub fn open_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.open_time)
    }
}

/// Interval codes accepted by `/api/v3/klines`
pub const BINANCE_INTERVALS: &[&str] = &[
    "1s", "1m", "3m", "5m", "15m", "30m", "1h", "2h", "4h", "6h", "8h", "12h", "1d", "3d", "1w",
    "1M",
];

/// Check if interval is a known Binance code. The client itself never
/// rejects an interval; the exchange does.
pub fn is_valid_interval(interval: &str) -> bool {
    BINANCE_INTERVALS.contains(&interval)
}
