//! Entrypoint.

use clap::Parser;
use config::DeployGasOpts;
use dotenvy::dotenv;
use primitives::broadcast::{load_broadcast_log, total_gas};
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;

fn main() -> eyre::Result<()> {
    if let Ok(custom_env_file) = std::env::var("ENV_FILE") {
        dotenvy::from_filename(custom_env_file)?;
    } else {
        // Try the default .env file, and ignore if it doesn't exist.
        dotenv().ok();
    }

    let opts = DeployGasOpts::parse();

    // Diagnostics go to stderr; stdout carries only the gas total.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let log = load_broadcast_log(&opts.broadcast)?;
    debug!(transactions = log.transactions.len(), "summing deployment gas");

    println!("{}", total_gas(&log)?);

    Ok(())
}
