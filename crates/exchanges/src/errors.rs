//! Shared error taxonomy for venue adapters
//!
//! Every classified venue failure maps onto one variant of [`ExchangeError`].
//! Venue-specific error-code strings resolve through an explicit
//! [`ErrorRegistry`] lookup rather than any dynamic dispatch.

use std::collections::HashMap;
use thiserror::Error;

/// Result type for exchange operations
pub type Result<T> = std::result::Result<T, ExchangeError>;

/// Exchange operation errors
#[derive(Error, Debug, Clone)]
pub enum ExchangeError {
    /// Success indicator field missing from a JSON response body
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid credentials on a first-ever authenticated attempt
    #[error("authentication error: {0}")]
    Authentication(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Throttling / DDoS protection; the caller is expected to back off
    #[error("rate limited by venue: {0}")]
    DdosProtection(String),

    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("invalid order: {0}")]
    InvalidOrder(String),

    #[error("order not found: {0}")]
    OrderNotFound(String),

    /// Venue reported a temporary processing problem
    #[error("exchange not available: {0}")]
    ExchangeNotAvailable(String),

    /// Catch-all for classified venue failures; carries venue id and raw body
    #[error("exchange error: {0}")]
    Exchange(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error {0}: {1}")]
    Http(u16, String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    #[error("signing error: {0}")]
    Signing(String),

    /// Operation disabled in the venue's capability table
    #[error("feature not supported: {0}")]
    FeatureNotSupported(String),
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for ExchangeError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Error classes a registry entry can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    PermissionDenied,
    DdosProtection,
    InsufficientFunds,
    InvalidOrder,
    OrderNotFound,
    ExchangeNotAvailable,
}

impl ErrorKind {
    /// Build the concrete error for this kind, carrying venue feedback
    pub fn into_error(self, feedback: String) -> ExchangeError {
        match self {
            ErrorKind::Authentication => ExchangeError::Authentication(feedback),
            ErrorKind::PermissionDenied => ExchangeError::PermissionDenied(feedback),
            ErrorKind::DdosProtection => ExchangeError::DdosProtection(feedback),
            ErrorKind::InsufficientFunds => ExchangeError::InsufficientFunds(feedback),
            ErrorKind::InvalidOrder => ExchangeError::InvalidOrder(feedback),
            ErrorKind::OrderNotFound => ExchangeError::OrderNotFound(feedback),
            ErrorKind::ExchangeNotAvailable => ExchangeError::ExchangeNotAvailable(feedback),
        }
    }
}

/// Venue error-code to error-class registry
///
/// Keys are the exact code strings a venue returns in its `message` field.
#[derive(Debug, Clone, Default)]
pub struct ErrorRegistry {
    codes: HashMap<&'static str, ErrorKind>,
}

impl ErrorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one code; later registrations win
    pub fn with_code(mut self, code: &'static str, kind: ErrorKind) -> Self {
        self.codes.insert(code, kind);
        self
    }

    /// Exact-match lookup of a venue error code
    pub fn lookup(&self, code: &str) -> Option<ErrorKind> {
        self.codes.get(code).copied()
    }
}
