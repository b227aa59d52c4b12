//! Entrypoint.

use clap::Parser;
use config::ReportOpts;
use dotenvy::dotenv;
use primitives::cost::render_report;
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;

fn main() -> eyre::Result<()> {
    if let Ok(custom_env_file) = std::env::var("ENV_FILE") {
        dotenvy::from_filename(custom_env_file)?;
    } else {
        // Try the default .env file, and ignore if it doesn't exist.
        dotenv().ok();
    }

    let opts = ReportOpts::parse();

    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(calls_per_hour = opts.calls_per_hour, "rendering cost report");

    println!(
        "{}",
        render_report(opts.gas, opts.gas_price, opts.eth_price, opts.calls_per_hour)
    );

    Ok(())
}
