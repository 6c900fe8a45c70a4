//! Shared fixtures for oxidex integration tests
//!
//! Response bodies here mirror the venue's documented wire shapes so the
//! scenario tests stay close to what the exchange actually returns.

use oxidex_exchanges::bitasset::{BitassetConfig, BitassetExchange};

/// Documented success envelope for the public `symbols` endpoint
pub const SYMBOLS_BODY: &str = r#"{
    "code": 0,
    "msg": "success",
    "data": [{
        "id": 1,
        "name": "USDT-CNYT",
        "baseCurrency": "CNYT",
        "quoteCurrency": "USDT",
        "priceDecimal": 4,
        "amountDecimal": 1,
        "takerFeeRatio": 0,
        "makerFeeRatio": 0
    }]
}"#;

/// Documented success envelope for the accounts `balance` endpoint
pub const BALANCE_BODY: &str = r#"{
    "code": 0,
    "msg": "success",
    "data": [
        {"currency": "BTC", "available": "1.5", "frozen": "0.5", "balance": "2.0"}
    ]
}"#;

/// Adapter instance without credentials (public namespace only)
pub fn public_adapter() -> BitassetExchange {
    BitassetExchange::new(BitassetConfig::default()).expect("adapter construction")
}

/// Adapter instance with test credentials
pub fn authenticated_adapter() -> BitassetExchange {
    let config = BitassetConfig::default()
        .with_credentials("test-key".to_string(), "test-secret".to_string());
    BitassetExchange::new(config).expect("adapter construction")
}

/// Build a venue failure body with the given `message` code
pub fn failure_body(message: &str) -> String {
    format!(r#"{{"msg":"fail","message":"{message}"}}"#)
}
