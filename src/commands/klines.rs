//! Klines command

use anyhow::{Context, Result};
use binance_rest::binance::is_valid_interval;
use binance_rest::BinanceClient;
use chrono::NaiveDate;
use tracing::{info, warn};

/// Parse a time argument: epoch milliseconds or a UTC calendar date
pub fn parse_time_arg(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if let Ok(ms) = raw.parse::<i64>() {
        return Ok(ms);
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid time '{}': expected YYYY-MM-DD or epoch ms", raw))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .context("Invalid time of day")?;

    Ok(midnight.and_utc().timestamp_millis())
}

pub async fn run(
    client: &BinanceClient,
    symbol: &str,
    interval: &str,
    start: Option<String>,
    end: Option<String>,
    limit: Option<u32>,
    parsed: bool,
) -> Result<()> {
    if !is_valid_interval(interval) {
        warn!("Unrecognised interval '{}', sending as-is", interval);
    }

    let start_time = start.as_deref().map(parse_time_arg).transpose()?;
    let end_time = end.as_deref().map(parse_time_arg).transpose()?;

    if !parsed {
        let klines = client
            .klines(symbol, interval, start_time, end_time, limit)
            .await
            .with_context(|| format!("Failed to fetch {} {} klines", symbol, interval))?;
        return super::print_json(&klines);
    }

    let klines = client
        .get_klines(symbol, interval, start_time, end_time, limit)
        .await
        .with_context(|| format!("Failed to fetch {} {} klines", symbol, interval))?;

    info!("Fetched {} candles for {} {}", klines.len(), symbol, interval);

    println!(
        "{:<25} {:>14} {:>14} {:>14} {:>14} {:>18}",
        "open_time", "open", "high", "low", "close", "volume"
    );
    for k in &klines {
        let open_time = k
            .open_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| k.open_time.to_string());
        println!(
            "{:<25} {:>14} {:>14} {:>14} {:>14} {:>18}",
            open_time, k.open, k.high, k.low, k.close, k.volume
        );
    }

    Ok(())
}
