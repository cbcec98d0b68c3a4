use anyhow::Result;
use clap::Parser;

use fixly::app::App;
use fixly::cli::Cli;
use fixly::config::{self, MarketConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("fixly");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join("fixly.log");

    // Initialize tracing with file logging so stdout stays clean for the menu
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "fixly.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let market_config = MarketConfig::load_or_create(&config_path)?;

    let mut app = App::new(market_config);
    let result = app.run();

    drop(guard);

    result
}
