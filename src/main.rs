//! binance-rest - command line entry point
//!
//! This binary provides three subcommands:
//! - exchange-info: Trading rules and symbol listings
//! - ticker: 24 hour price change statistics for a symbol
//! - klines: Candlestick bars for a symbol

use anyhow::{Context, Result};
use binance_rest::{BinanceClient, ClientConfig};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "binance-rest")]
#[command(about = "Query Binance public REST market data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the API host (also BINANCE_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Current exchange trading rules and symbol information
    ExchangeInfo,

    /// 24 hour rolling window price change statistics
    Ticker {
        /// Trading pair, e.g. BTCUSDT
        symbol: String,
    },

    /// Kline/candlestick bars
    Klines {
        /// Trading pair, e.g. BTCUSDT
        symbol: String,

        /// Interval code, e.g. 1m, 1h, 1d
        interval: String,

        /// Start time (YYYY-MM-DD or epoch milliseconds)
        #[arg(long)]
        start: Option<String>,

        /// End time (YYYY-MM-DD or epoch milliseconds)
        #[arg(long)]
        end: Option<String>,

        /// Number of klines to request
        #[arg(short, long)]
        limit: Option<u32>,

        /// Print parsed OHLCV rows instead of raw JSON
        #[arg(long)]
        parsed: bool,
    },
}

fn setup_logging(verbose: bool, command_name: &str) -> Result<()> {
    std::fs::create_dir_all("logs")?;

    // Create log file with naming pattern: {command}_{date}.log
    let log_filename = format!(
        "{}_{}.log",
        command_name,
        chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
    );

    // Set log level - filter out noisy external crates
    let level = if verbose { "debug" } else { "info" };
    let filter_str = format!(
        "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn",
        level
    );
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let file_appender = tracing_appender::rolling::never("logs", &log_filename);

    // Console goes to stderr so stdout stays clean JSON
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let command_name = match &cli.command {
        Commands::ExchangeInfo => "exchange_info",
        Commands::Ticker { .. } => "ticker",
        Commands::Klines { .. } => "klines",
    };

    setup_logging(cli.verbose, command_name)?;

    let mut config = ClientConfig::from_env().context("Failed to load client configuration")?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    info!("Using {}", config.base_url);

    let client = BinanceClient::with_config(config).context("Failed to create Binance client")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    match cli.command {
        Commands::ExchangeInfo => runtime.block_on(commands::exchange_info::run(&client)),

        Commands::Ticker { symbol } => runtime.block_on(commands::ticker::run(&client, &symbol)),

        Commands::Klines {
            symbol,
            interval,
            start,
            end,
            limit,
            parsed,
        } => runtime.block_on(commands::klines::run(
            &client, &symbol, &interval, start, end, limit, parsed,
        )),
    }
}
