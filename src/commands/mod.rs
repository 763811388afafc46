//! Subcommand implementations

pub mod exchange_info;
pub mod klines;
pub mod ticker;

use anyhow::Result;
use serde_json::Value;

/// Write a payload to stdout as pretty JSON
pub(crate) fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
