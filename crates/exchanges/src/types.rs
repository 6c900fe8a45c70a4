//! Normalized market, currency, and balance types shared by all venues
//!
//! Everything here is a transient, request-scoped value object; identity never
//! persists across calls. Balance amounts are plain f64; venues report them
//! as decimal strings and the framework deliberately trusts those numbers
//! as-is.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Logical endpoint grouping sharing a base URL and auth requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Public,
    Accounts,
}

impl Namespace {
    /// URL path segment for this namespace
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Public => "public",
            Namespace::Accounts => "accounts",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered request parameters
///
/// Venue signatures cover the URL-encoded parameter string, so insertion
/// order must survive all the way to the wire. A plain pair list keeps it.
pub type Params = Vec<(String, String)>;

/// A fully prepared outbound request, ready for the HTTP transport
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub url: String,
    pub method: String,
    pub body: Option<String>,
    pub headers: HashMap<String, String>,
}

/// A normalized tradable pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Venue-internal market id
    pub id: i64,
    /// Display symbol, `BASE/QUOTE`
    pub symbol: String,
    /// Normalized base currency code
    pub base: String,
    /// Normalized quote currency code
    pub quote: String,
}

/// A normalized asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// Venue-internal currency id
    pub id: String,
    /// Venue display name
    pub name: String,
    /// Normalized code
    pub code: String,
}

/// Per-asset account balance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountBalance {
    pub free: f64,
    pub used: f64,
    pub total: f64,
}

/// Normalized balance report
///
/// `info` holds the venue's raw record list untouched, for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceReport {
    pub info: Value,
    pub balances: HashMap<String, AccountBalance>,
}

/// Standard operations a venue may or may not support
///
/// One flag per framework operation; adapters declare their table once and
/// the host consults it before routing calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureTable {
    pub cors: bool,
    pub fetch_markets: bool,
    pub fetch_currencies: bool,
    pub fetch_balance: bool,
    pub create_order: bool,
    pub create_market_order: bool,
    pub cancel_order: bool,
    pub fetch_order: bool,
    pub fetch_open_orders: bool,
    pub fetch_closed_orders: bool,
    pub fetch_ticker: bool,
    pub fetch_trades: bool,
    pub fetch_order_book: bool,
    pub fetch_l2_order_book: bool,
    pub fetch_ohlcv: bool,
    pub fetch_deposit_address: bool,
    pub fetch_deposits: bool,
    pub fetch_withdrawals: bool,
    pub fetch_transactions: bool,
    pub withdraw: bool,
}

impl FeatureTable {
    /// Table with every operation disabled
    pub const fn none() -> Self {
        Self {
            cors: false,
            fetch_markets: false,
            fetch_currencies: false,
            fetch_balance: false,
            create_order: false,
            create_market_order: false,
            cancel_order: false,
            fetch_order: false,
            fetch_open_orders: false,
            fetch_closed_orders: false,
            fetch_ticker: false,
            fetch_trades: false,
            fetch_order_book: false,
            fetch_l2_order_book: false,
            fetch_ohlcv: false,
            fetch_deposit_address: false,
            fetch_deposits: false,
            fetch_withdrawals: false,
            fetch_transactions: false,
            withdraw: false,
        }
    }
}

/// Endpoint routes for one namespace
#[derive(Debug, Clone)]
pub struct NamespaceRoutes {
    /// Base URL template; `{hostname}` is substituted at request time
    pub url_template: &'static str,
    /// GET endpoint paths under this namespace
    pub get: &'static [&'static str],
}

/// Static declaration of a venue's identity, routing, and capabilities
///
/// Constructed once at adapter initialization and immutable thereafter.
#[derive(Debug, Clone)]
pub struct VenueDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub countries: &'static [&'static str],
    pub version: &'static str,
    /// Minimum delay between requests, in milliseconds
    pub rate_limit_ms: u64,
    pub hostname: &'static str,
    pub public: NamespaceRoutes,
    pub accounts: NamespaceRoutes,
    pub has: FeatureTable,
}

impl VenueDescriptor {
    /// Resolve a namespace's base URL from its hostname template
    pub fn base_url(&self, namespace: Namespace) -> String {
        let routes = match namespace {
            Namespace::Public => &self.public,
            Namespace::Accounts => &self.accounts,
        };
        routes.url_template.replace("{hostname}", self.hostname)
    }
}
