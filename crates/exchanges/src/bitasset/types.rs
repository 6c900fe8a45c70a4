//! Bitasset wire-format records
//!
//! Every Bitasset response is a JSON envelope `{code, msg, data}` on success;
//! failure bodies carry `{msg, message}` and go through the classifier
//! instead. Markets deserialize into typed records; currencies and balances
//! arrive with inconsistent field types and are read through the safe JSON
//! helpers instead.

use serde::Deserialize;

/// One record from the public `symbols` endpoint
///
/// ```json
/// {
///     "id": 1,
///     "name": "USDT-CNYT",
///     "baseCurrency": "CNYT",
///     "quoteCurrency": "USDT",
///     "priceDecimal": 4,
///     "amountDecimal": 1,
///     "takerFeeRatio": 0,
///     "makerFeeRatio": 0
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawMarket {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "baseCurrency")]
    pub base_currency: String,
    #[serde(rename = "quoteCurrency")]
    pub quote_currency: String,
    #[serde(rename = "priceDecimal", default)]
    pub price_decimal: Option<u32>,
    #[serde(rename = "amountDecimal", default)]
    pub amount_decimal: Option<u32>,
    #[serde(rename = "takerFeeRatio", default)]
    pub taker_fee_ratio: Option<f64>,
    #[serde(rename = "makerFeeRatio", default)]
    pub maker_fee_ratio: Option<f64>,
}
