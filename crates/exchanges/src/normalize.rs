//! Cross-venue normalization helpers
//!
//! One canonicalization function maps every venue-specific asset spelling to
//! the framework's shared code, so the same underlying asset always gets the
//! same key no matter which venue produced it.

use crate::types::{AccountBalance, BalanceReport};
use serde_json::Value;

/// Map a venue asset identifier to the framework's normalized code
///
/// Unknown identifiers pass through unchanged; only spellings in the shared
/// alias table are rewritten.
pub fn canonicalize(id: &str) -> String {
    match id {
        "XBT" => "BTC".to_string(),
        "BCC" => "BCH".to_string(),
        "DRK" => "DASH".to_string(),
        other => other.to_string(),
    }
}

/// Assemble per-currency accounts into the framework's balance-report shape
///
/// This pass does not reconcile the venue's numbers: `total` is reported
/// as-is, never recomputed from `free + used`.
pub fn parse_balance(
    info: Value,
    accounts: impl IntoIterator<Item = (String, AccountBalance)>,
) -> BalanceReport {
    BalanceReport {
        info,
        balances: accounts.into_iter().collect(),
    }
}
