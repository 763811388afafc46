//! 24h ticker command

use anyhow::{Context, Result};
use binance_rest::BinanceClient;

pub async fn run(client: &BinanceClient, symbol: &str) -> Result<()> {
    let ticker = client
        .ticker_price_change(symbol)
        .await
        .with_context(|| format!("Failed to fetch 24hr ticker for {}", symbol))?;

    super::print_json(&ticker)
}
