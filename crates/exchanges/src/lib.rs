//! # oxidex exchange integrations
//!
//! Venue adapters for the oxidex multi-venue trading framework. Each adapter
//! translates one exchange's proprietary REST dialect into the framework's
//! normalized market/currency/balance model: a static capability descriptor,
//! fetch-and-normalize routines, a request signer, and an error classifier.
//!
//! ## Architecture
//!
//! - **monoio-native HTTPS transport**: single-threaded async, one request
//!   in flight per operation
//! - **Shared error taxonomy**: venue payloads classify into
//!   [`errors::ExchangeError`] via explicit code registries
//! - **Normalized model**: one canonicalization function for asset codes,
//!   one balance-report shape across venues

pub mod errors;
pub mod http;
pub mod json;
pub mod normalize;
pub mod traits;
pub mod types;

#[cfg(feature = "bitasset")]
pub mod bitasset;

// Re-export main types
#[cfg(feature = "bitasset")]
pub use bitasset::{BitassetConfig, BitassetExchange};
pub use errors::{ErrorKind, ErrorRegistry, ExchangeError, Result};
pub use http::HttpsClient;
pub use traits::Venue;
pub use types::*;

/// Prelude for convenient imports
pub mod prelude {
    #[cfg(feature = "bitasset")]
    pub use crate::bitasset::{BitassetConfig, BitassetExchange};
    pub use crate::errors::{ErrorKind, ErrorRegistry, ExchangeError, Result};
    pub use crate::http::HttpsClient;
    pub use crate::traits::Venue;
    pub use crate::types::*;
    pub use oxidex_core::prelude::*;
}
