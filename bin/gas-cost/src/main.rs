//! Entrypoint.

use clap::Parser;
use config::CostOpts;
use dotenvy::dotenv;
use primitives::cost::{call_cost, format_fiat};
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;

fn main() -> eyre::Result<()> {
    if let Ok(custom_env_file) = std::env::var("ENV_FILE") {
        dotenvy::from_filename(custom_env_file)?;
    } else {
        // Try the default .env file, and ignore if it doesn't exist.
        dotenv().ok();
    }

    let opts = CostOpts::parse();

    // Diagnostics go to stderr; stdout carries only the result line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(
        gas = opts.gas,
        gas_price = opts.gas_price,
        eth_price = opts.eth_price,
        "computing single-call cost"
    );

    println!("{}", format_fiat(call_cost(opts.gas, opts.gas_price, opts.eth_price)));

    Ok(())
}
