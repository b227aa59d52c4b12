//! Gascope configuration
use std::path::PathBuf;

use clap::Parser;

/// Default gas used by a contract call.
pub const DEFAULT_GAS_USED: u64 = 853_482;
/// Default gas price in gwei.
pub const DEFAULT_GAS_PRICE_GWEI: f64 = 13.7;
/// Default ETH price for the single-call calculator.
pub const DEFAULT_ETH_PRICE: f64 = 1129.0;
/// Default ETH price for the report calculator.
///
/// The two calculators deliberately keep their own ETH price defaults;
/// they are independent tools.
pub const DEFAULT_REPORT_ETH_PRICE: f64 = 1270.0;
/// Default number of calls per hour for the report calculator.
pub const DEFAULT_CALLS_PER_HOUR: u64 = 6;
/// Default location of the forge broadcast artifact.
pub const DEFAULT_BROADCAST_PATH: &str = "./broadcast/Deploy.Mainnet.s.sol/1337/run-latest.json";

/// CLI options for the single-call cost calculator
#[derive(Debug, Clone, Parser)]
pub struct CostOpts {
    /// Gas used
    #[clap(long = "gas", env = "GAS_USED", default_value_t = DEFAULT_GAS_USED)]
    pub gas: u64,
    /// Gas price per gwei
    #[clap(
        long = "gas_price",
        env = "GAS_PRICE_GWEI",
        allow_negative_numbers = true,
        default_value_t = DEFAULT_GAS_PRICE_GWEI
    )]
    pub gas_price: f64,
    /// ETH price
    #[clap(
        long = "eth_price",
        env = "ETH_PRICE",
        allow_negative_numbers = true,
        default_value_t = DEFAULT_ETH_PRICE
    )]
    pub eth_price: f64,
}

/// CLI options for the cost report calculator
#[derive(Debug, Clone, Parser)]
pub struct ReportOpts {
    /// Gas used
    #[clap(long = "gas", env = "GAS_USED", default_value_t = DEFAULT_GAS_USED)]
    pub gas: u64,
    /// Gas price per gwei
    #[clap(
        long = "gas_price",
        env = "GAS_PRICE_GWEI",
        allow_negative_numbers = true,
        default_value_t = DEFAULT_GAS_PRICE_GWEI
    )]
    pub gas_price: f64,
    /// ETH price
    #[clap(
        long = "eth_price",
        env = "ETH_PRICE",
        allow_negative_numbers = true,
        default_value_t = DEFAULT_REPORT_ETH_PRICE
    )]
    pub eth_price: f64,
    /// Calls per hour
    #[clap(
        long = "calls_per_hour",
        env = "CALLS_PER_HOUR",
        default_value_t = DEFAULT_CALLS_PER_HOUR
    )]
    pub calls_per_hour: u64,
}

/// CLI options for the deployment gas summer
#[derive(Debug, Clone, Parser)]
pub struct DeployGasOpts {
    /// Path to the forge broadcast artifact
    #[clap(long = "broadcast", env = "BROADCAST_PATH", default_value = DEFAULT_BROADCAST_PATH)]
    pub broadcast: PathBuf,
}
