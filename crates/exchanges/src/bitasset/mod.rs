//! Bitasset venue adapter
//!
//! Translates Bitasset's REST dialect into the framework's normalized
//! market/currency/balance model. Only market listing, currency listing, and
//! balance retrieval are enabled; the venue's capability table disables
//! everything else. The adapter performs no retries and no backoff; every
//! classified condition is raised straight to the caller.

pub mod classify;
pub mod sign;
pub mod types;

use crate::errors::{ErrorKind, ErrorRegistry, ExchangeError, Result};
use crate::http::HttpsClient;
use crate::json::{required, safe_f64, safe_string};
use crate::normalize::{canonicalize, parse_balance};
use crate::traits::Venue;
use crate::types::{
    AccountBalance, BalanceReport, Currency, FeatureTable, Market, Namespace, NamespaceRoutes,
    Params, SignedRequest, VenueDescriptor,
};
use async_trait::async_trait;
use oxidex_core::{millis, PerfTimer};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

pub use sign::{BitassetCredentials, BitassetSigner};
pub use types::RawMarket;

/// Bitasset adapter configuration
#[derive(Debug, Clone, Default)]
pub struct BitassetConfig {
    pub api_key: String,
    pub api_secret: String,
}

impl BitassetConfig {
    pub fn with_credentials(mut self, api_key: String, api_secret: String) -> Self {
        self.api_key = api_key;
        self.api_secret = api_secret;
        self
    }

    pub fn with_env_credentials(mut self) -> Result<Self> {
        let credentials = BitassetCredentials::from_env()?;
        self.api_key = credentials.api_key;
        self.api_secret = credentials.secret_key;
        Ok(self)
    }
}

/// Bitasset venue adapter
///
/// Holds no persistent state beyond the markets cache and the
/// authentication-success latch; all fetched entities are request-scoped.
pub struct BitassetExchange {
    descriptor: VenueDescriptor,
    signer: BitassetSigner,
    registry: ErrorRegistry,
    transport: HttpsClient,
    markets: RefCell<Option<HashMap<String, Market>>>,
    /// Latch: has at least one authenticated call ever succeeded here.
    /// Set by the post-request hook, read by the classifier, never reset.
    authenticated_once: AtomicBool,
}

impl BitassetExchange {
    /// Create an adapter instance
    pub fn new(config: BitassetConfig) -> Result<Self> {
        let credentials = if config.api_key.is_empty() && config.api_secret.is_empty() {
            None
        } else {
            Some(BitassetCredentials::new(config.api_key, config.api_secret))
        };

        Ok(Self {
            descriptor: Self::describe(),
            signer: BitassetSigner::new(credentials),
            registry: Self::exceptions(),
            transport: HttpsClient::new()?,
            markets: RefCell::new(None),
            authenticated_once: AtomicBool::new(false),
        })
    }

    /// Static capability and routing declaration for Bitasset
    pub fn describe() -> VenueDescriptor {
        VenueDescriptor {
            id: "bitasset",
            name: "Bitasset",
            countries: &["US"],
            version: "v1",
            rate_limit_ms: 1500,
            hostname: "api.bitasset.com",
            public: NamespaceRoutes {
                url_template: "https://{hostname}",
                get: &["symbols", "currencies"],
            },
            accounts: NamespaceRoutes {
                url_template: "https://{hostname}",
                get: &["balance"],
            },
            has: FeatureTable {
                fetch_markets: true,
                fetch_currencies: true,
                fetch_balance: true,
                ..FeatureTable::none()
            },
        }
    }

    /// Venue error-code registry for the Bitasset family
    fn exceptions() -> ErrorRegistry {
        ErrorRegistry::new()
            .with_code("APISIGN_NOT_PROVIDED", ErrorKind::Authentication)
            .with_code("INVALID_SIGNATURE", ErrorKind::Authentication)
            .with_code("INVALID_PERMISSION", ErrorKind::Authentication)
            .with_code("WHITELIST_VIOLATION_IP", ErrorKind::PermissionDenied)
            .with_code("INSUFFICIENT_FUNDS", ErrorKind::InsufficientFunds)
            .with_code("QUANTITY_NOT_PROVIDED", ErrorKind::InvalidOrder)
            .with_code("MIN_TRADE_REQUIREMENT_NOT_MET", ErrorKind::InvalidOrder)
            .with_code("RATE_NOT_PROVIDED", ErrorKind::InvalidOrder)
            .with_code("ORDER_NOT_OPEN", ErrorKind::OrderNotFound)
            .with_code("UUID_INVALID", ErrorKind::OrderNotFound)
    }

    /// Whether market metadata has been loaded into the cache
    pub fn markets_loaded(&self) -> bool {
        self.markets.borrow().is_some()
    }

    /// Look up a cached market by its display symbol
    pub fn market(&self, symbol: &str) -> Option<Market> {
        self.markets.borrow().as_ref()?.get(symbol).cloned()
    }

    /// Ensure market metadata is loaded; idempotent, cached per instance
    pub async fn load_markets(&self) -> Result<()> {
        if self.markets_loaded() {
            return Ok(());
        }

        let markets = self.fetch_markets().await?;
        let indexed = markets
            .into_iter()
            .map(|market| (market.symbol.clone(), market))
            .collect();
        *self.markets.borrow_mut() = Some(indexed);
        Ok(())
    }

    /// Fetch and normalize the venue's tradable pairs
    pub async fn fetch_markets(&self) -> Result<Vec<Market>> {
        let response = self
            .request("symbols", Namespace::Public, "GET", Params::new())
            .await?;
        parse_markets(&response)
    }

    /// Fetch and normalize the venue's assets, keyed by raw display name
    pub async fn fetch_currencies(&self, params: Params) -> Result<HashMap<String, Currency>> {
        let response = self
            .request("currencies", Namespace::Public, "GET", params)
            .await?;
        Ok(parse_currencies(&response))
    }

    /// Fetch account balances through the authenticated namespace
    pub async fn fetch_balance(&self, params: Params) -> Result<BalanceReport> {
        self.load_markets().await?;

        let response = self
            .request("balance", Namespace::Accounts, "GET", params)
            .await?;
        let data = required(&response, "data")?;

        Ok(parse_balance(data.clone(), parse_balance_accounts(data)))
    }

    /// Generic request pipeline: sign, dispatch, classify, decode
    pub async fn request(
        &self,
        path: &str,
        namespace: Namespace,
        method: &str,
        params: Params,
    ) -> Result<Value> {
        let _timer = PerfTimer::start(format!("bitasset_{namespace}_{path}"));

        let signed = self.sign(path, namespace, method, &params)?;
        debug!("{} {}", signed.method, signed.url);

        let response = self
            .transport
            .request(&signed.method, &signed.url, signed.body.as_deref(), &signed.headers)
            .await?;

        // venue error payloads are classified even on non-2xx statuses
        self.classify_response(&signed.url, &response.body)?;

        if response.status != 200 {
            return Err(ExchangeError::Http(response.status, response.body));
        }

        let value: Value = serde_json::from_str(&response.body)?;

        // post-request hook: first authenticated success flips the latch
        if namespace == Namespace::Accounts {
            self.authenticated_once.store(true, Ordering::Relaxed);
        }

        Ok(value)
    }
}

#[async_trait(?Send)]
impl Venue for BitassetExchange {
    fn descriptor(&self) -> &VenueDescriptor {
        &self.descriptor
    }

    async fn fetch_markets(&self) -> Result<Vec<Market>> {
        BitassetExchange::fetch_markets(self).await
    }

    async fn fetch_currencies(&self, params: Params) -> Result<HashMap<String, Currency>> {
        BitassetExchange::fetch_currencies(self, params).await
    }

    async fn fetch_balance(&self, params: Params) -> Result<BalanceReport> {
        BitassetExchange::fetch_balance(self, params).await
    }

    fn sign(
        &self,
        path: &str,
        namespace: Namespace,
        method: &str,
        params: &Params,
    ) -> Result<SignedRequest> {
        self.signer
            .sign(&self.descriptor, path, namespace, method, params, millis())
    }

    fn classify_response(&self, url: &str, body: &str) -> Result<()> {
        classify::classify_response(
            self.descriptor.id,
            &self.registry,
            self.authenticated_once.load(Ordering::Relaxed),
            url,
            body,
        )
    }
}

/// Normalize the public `symbols` response, preserving venue order
fn parse_markets(response: &Value) -> Result<Vec<Market>> {
    let raw: Vec<RawMarket> = serde_json::from_value(required(response, "data")?.clone())?;

    Ok(raw
        .into_iter()
        .map(|market| {
            let base = canonicalize(&market.base_currency);
            let quote = canonicalize(&market.quote_currency);
            Market {
                id: market.id,
                symbol: format!("{base}/{quote}"),
                base,
                quote,
            }
        })
        .collect())
}

/// Normalize the public `currencies` response
///
/// Keyed by the venue's raw `name` field; the normalized `code` comes from
/// canonicalizing `id`. That is the venue's documented mapping, asymmetric
/// as it looks.
fn parse_currencies(response: &Value) -> HashMap<String, Currency> {
    let mut result = HashMap::new();

    // a missing data array means no currencies, not an error
    let currencies = response
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for currency in currencies {
        let id = safe_string(currency, "id").unwrap_or_default();
        let name = safe_string(currency, "name").unwrap_or_default();
        result.insert(
            name.clone(),
            Currency {
                code: canonicalize(&id),
                id,
                name,
            },
        );
    }

    result
}

/// Group raw balance records by currency and normalize the amounts
///
/// Duplicate currencies resolve last-write-wins; missing or unparseable
/// amounts default to 0 rather than failing the fetch.
fn parse_balance_accounts(data: &Value) -> Vec<(String, AccountBalance)> {
    let records = data.as_array().map(Vec::as_slice).unwrap_or_default();

    let mut indexed: Vec<(String, &Value)> = Vec::new();
    for record in records {
        let Some(currency_id) = safe_string(record, "currency") else {
            continue;
        };
        match indexed.iter_mut().find(|(id, _)| *id == currency_id) {
            Some(slot) => slot.1 = record,
            None => indexed.push((currency_id, record)),
        }
    }

    indexed
        .into_iter()
        .map(|(currency_id, record)| {
            (
                canonicalize(&currency_id),
                AccountBalance {
                    free: safe_f64(record, "available", 0.0),
                    used: safe_f64(record, "frozen", 0.0),
                    total: safe_f64(record, "balance", 0.0),
                },
            )
        })
        .collect()
}
