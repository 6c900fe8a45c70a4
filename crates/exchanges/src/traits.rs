//! The host-facing venue seam
//!
//! The host's generic request pipeline talks to every adapter through this
//! trait: it reads the capability descriptor once at registration, calls
//! `sign` before each outbound request, and runs `classify_response` over
//! every received body before control returns to the caller.

use crate::errors::Result;
use crate::types::{BalanceReport, Currency, Market, Namespace, Params, SignedRequest, VenueDescriptor};
use async_trait::async_trait;
use std::collections::HashMap;

/// One venue adapter instance
///
/// Futures are `?Send` by design: the framework runs on monoio's
/// single-threaded cooperative model.
#[async_trait(?Send)]
pub trait Venue {
    /// Static capability and routing declaration
    fn descriptor(&self) -> &VenueDescriptor;

    /// Fetch and normalize tradable pairs, in venue response order
    async fn fetch_markets(&self) -> Result<Vec<Market>>;

    /// Fetch and normalize assets, keyed by the venue's raw display name
    async fn fetch_currencies(&self, params: Params) -> Result<HashMap<String, Currency>>;

    /// Fetch account balances via the authenticated namespace
    async fn fetch_balance(&self, params: Params) -> Result<BalanceReport>;

    /// Prepare one outbound request with the venue's signing scheme
    fn sign(
        &self,
        path: &str,
        namespace: Namespace,
        method: &str,
        params: &Params,
    ) -> Result<SignedRequest>;

    /// Translate a venue error payload into the shared taxonomy
    ///
    /// Returns `Ok(())` when the body signals success or is not a JSON
    /// object.
    fn classify_response(&self, url: &str, body: &str) -> Result<()>;
}
