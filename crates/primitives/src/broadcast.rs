use std::path::Path;

use alloy_primitives::U256;
use eyre::{Result, WrapErr, eyre};
use serde::Deserialize;

/// A deployment broadcast artifact as written by `forge script`.
///
/// Only the fields needed for gas accounting are modeled; everything
/// else in the artifact is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastLog {
    /// Transactions submitted during the deployment run.
    pub transactions: Vec<BroadcastEntry>,
}

/// A single entry in the `transactions` array of a broadcast artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastEntry {
    /// The transaction request that was broadcast.
    pub transaction: TransactionRequest,
}

/// The transaction request recorded for a broadcast entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRequest {
    /// Gas limit as a hexadecimal string, e.g. `"0x1a2b"`.
    pub gas: String,
}

/// Parse a hexadecimal gas value, with or without a `0x` prefix.
pub fn parse_gas_hex(raw: &str) -> Result<U256> {
    let digits = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")).unwrap_or(raw);
    // ruint parses an empty digit string as zero; a bare prefix is no number.
    if digits.is_empty() {
        return Err(eyre!("invalid hex gas value {raw:?}"));
    }
    U256::from_str_radix(digits, 16).wrap_err_with(|| format!("invalid hex gas value {raw:?}"))
}

/// Sum the gas of every transaction in the log.
///
/// The running total is a `U256`, so real-world inputs cannot overflow.
/// Any malformed gas value aborts the whole sum.
pub fn total_gas(log: &BroadcastLog) -> Result<U256> {
    let mut total = U256::ZERO;
    for entry in &log.transactions {
        let gas = parse_gas_hex(&entry.transaction.gas)?;
        total = total.checked_add(gas).ok_or_else(|| eyre!("gas total overflows 256 bits"))?;
    }
    Ok(total)
}

/// Read and parse a broadcast artifact from disk.
pub fn load_broadcast_log(path: &Path) -> Result<BroadcastLog> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read broadcast artifact at {}", path.display()))?;
    serde_json::from_str(&contents)
        .wrap_err_with(|| format!("malformed broadcast artifact at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_with_gas(values: &[&str]) -> BroadcastLog {
        BroadcastLog {
            transactions: values
                .iter()
                .map(|gas| BroadcastEntry {
                    transaction: TransactionRequest { gas: (*gas).to_owned() },
                })
                .collect(),
        }
    }

    #[test]
    fn parses_prefixed_and_bare_hex() {
        assert_eq!(parse_gas_hex("0x1a2b").unwrap(), U256::from(0x1a2b));
        assert_eq!(parse_gas_hex("0X1A2B").unwrap(), U256::from(0x1a2b));
        assert_eq!(parse_gas_hex("1a2b").unwrap(), U256::from(0x1a2b));
        assert_eq!(parse_gas_hex("0x0").unwrap(), U256::ZERO);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(parse_gas_hex("not_hex").is_err());
        assert!(parse_gas_hex("").is_err());
        assert!(parse_gas_hex("0x").is_err());
    }

    #[test]
    fn sums_transaction_gas() {
        let log = log_with_gas(&["0x1", "0xa", "0x10"]);
        assert_eq!(total_gas(&log).unwrap(), U256::from(27));
    }

    #[test]
    fn empty_log_sums_to_zero() {
        let log = log_with_gas(&[]);
        assert_eq!(total_gas(&log).unwrap(), U256::ZERO);
    }

    #[test]
    fn malformed_entry_aborts_the_sum() {
        let log = log_with_gas(&["0x1", "not_hex", "0x10"]);
        assert!(total_gas(&log).is_err());
    }

    #[test]
    fn bare_prefix_aborts_the_sum() {
        let log = log_with_gas(&["0x1", "0x"]);
        assert!(total_gas(&log).is_err());
    }

    #[test]
    fn sums_values_beyond_u64() {
        let log = log_with_gas(&[
            "0xffffffffffffffffffffffffffffffff",
            "0xffffffffffffffffffffffffffffffff",
        ]);
        let expected = U256::from_str_radix("1fffffffffffffffffffffffffffffffe", 16).unwrap();
        assert_eq!(total_gas(&log).unwrap(), expected);
    }

    #[test]
    fn deserializes_artifact_and_ignores_extra_fields() {
        let raw = r#"{
            "transactions": [
                {
                    "hash": "0xabc",
                    "transactionType": "CREATE",
                    "contractName": "Deploy",
                    "transaction": { "from": "0x0", "gas": "0x1a2b", "value": "0x0" }
                }
            ],
            "receipts": [],
            "chain": 1337
        }"#;
        let log: BroadcastLog = serde_json::from_str(raw).unwrap();
        assert_eq!(log.transactions.len(), 1);
        assert_eq!(total_gas(&log).unwrap(), U256::from(0x1a2b));
    }

    #[test]
    fn missing_gas_field_is_a_parse_error() {
        let raw = r#"{ "transactions": [ { "transaction": { "from": "0x0" } } ] }"#;
        assert!(serde_json::from_str::<BroadcastLog>(raw).is_err());
    }

    #[test]
    fn missing_transactions_key_is_a_parse_error() {
        assert!(serde_json::from_str::<BroadcastLog>("{}").is_err());
    }
}
