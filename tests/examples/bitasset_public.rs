//! Basic Bitasset venue example using oxidex
//!
//! Demonstrates:
//! - Public market and currency listing over the monoio HTTPS transport
//! - Authenticated balance retrieval when credentials are present
//! - Unified logging with per-request timing

use oxidex_core::prelude::*;
use oxidex_exchanges::bitasset::{BitassetConfig, BitassetExchange};
use oxidex_exchanges::{Params, Venue};
use tracing::{info, warn};

#[monoio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();

    info!("Starting oxidex Bitasset public example");

    // Credentials are optional; public endpoints work without them
    let config = match BitassetConfig::default().with_env_credentials() {
        Ok(config) => config,
        Err(_) => {
            warn!("BITASSET_API_KEY/BITASSET_SECRET_KEY not set, public endpoints only");
            BitassetConfig::default()
        }
    };
    let authenticated = !config.api_key.is_empty();

    let exchange = BitassetExchange::new(config)?;
    let descriptor = exchange.descriptor();
    info!("Venue: {} ({})", descriptor.name, descriptor.id);
    info!("Rate limit: {}ms between requests", descriptor.rate_limit_ms);

    // Markets
    let markets = exchange.fetch_markets().await?;
    info!("Fetched {} markets", markets.len());
    for market in markets.iter().take(5) {
        info!("   {} (id {})", market.symbol, market.id);
    }

    // Currencies
    let currencies = exchange.fetch_currencies(Params::new()).await?;
    info!("Fetched {} currencies", currencies.len());

    // Balance, if we have credentials
    if authenticated {
        let report = exchange.fetch_balance(Params::new()).await?;
        info!("Fetched balances for {} assets", report.balances.len());
        for (code, balance) in &report.balances {
            if balance.total > 0.0 {
                info!(
                    "   {}: free={} used={} total={}",
                    code, balance.free, balance.used, balance.total
                );
            }
        }
    }

    info!("Done");
    Ok(())
}
