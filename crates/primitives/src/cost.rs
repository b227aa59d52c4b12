/// Number of gwei in one ETH.
pub const GWEI_PER_ETH: f64 = 1e9;

/// Hours in a day, used to scale hourly costs up to daily costs.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Compute the fiat cost of a single call.
///
/// `gas_price_gwei * gas_used` yields the fee in gwei; dividing by
/// [`GWEI_PER_ETH`] converts it to ETH before applying the exchange rate.
pub const fn call_cost(gas_used: u64, gas_price_gwei: f64, eth_price: f64) -> f64 {
    gas_price_gwei * gas_used as f64 / GWEI_PER_ETH * eth_price
}

/// Compute the fiat cost of an hour's worth of calls.
pub const fn hourly_cost(call_cost: f64, calls_per_hour: u64) -> f64 {
    call_cost * calls_per_hour as f64
}

/// Compute the fiat cost of a day's worth of calls from the hourly cost.
pub const fn daily_cost(hourly_cost: f64) -> f64 {
    hourly_cost * HOURS_PER_DAY
}

/// Format a fiat amount with a `$` prefix and two decimal places.
///
/// Rounding follows Rust's `{:.2}` float formatting: the exact binary
/// value is rounded to the nearest two-decimal string, ties to even.
pub fn format_fiat(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Render the labeled cost report for the extended calculator.
///
/// The report echoes the inputs, then a blank line, then the per-call,
/// per-hour and per-day costs. Label padding matches the original tool
/// and is cosmetic only.
pub fn render_report(
    gas_used: u64,
    gas_price_gwei: f64,
    eth_price: f64,
    calls_per_hour: u64,
) -> String {
    let per_call = call_cost(gas_used, gas_price_gwei, eth_price);
    let per_hour = hourly_cost(per_call, calls_per_hour);
    let per_day = daily_cost(per_hour);

    format!(
        "ETH price           ${eth_price}\n\
         Gas price (in gwei) {gas_price_gwei}\n\
         Gas used            {gas_used}\n\
         Calls per Hour      {calls_per_hour}\n\
         \n\
         Call Costs            {}\n\
         Call Costs (per hour) {}\n\
         Call Costs (per day)  {}",
        format_fiat(per_call),
        format_fiat(per_hour),
        format_fiat(per_day),
    )
}
