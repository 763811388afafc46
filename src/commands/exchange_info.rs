//! Exchange info command

use anyhow::{Context, Result};
use binance_rest::BinanceClient;
use tracing::info;

pub async fn run(client: &BinanceClient) -> Result<()> {
    let exchange_info = client
        .exchange_info()
        .await
        .context("Failed to fetch exchange info")?;

    if let Some(symbols) = exchange_info.get("symbols").and_then(|s| s.as_array()) {
        info!("Exchange lists {} symbols", symbols.len());
    }

    super::print_json(&exchange_info)
}
