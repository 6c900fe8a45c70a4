//! # oxidex core
//!
//! Shared runtime utilities for the oxidex multi-venue trading framework:
//! wall-clock timestamps (epoch milliseconds for request signing, nanoseconds
//! for latency measurement), latency timers, and unified logging setup.
//!
//! Venue adapters live in the `oxidex-exchanges` crate and build on these
//! primitives.

pub mod logging;
pub mod timing;

// Re-export commonly used items
pub use logging::init_logging;
pub use timing::{millis, nanos, PerfTimer, Timestamp};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::logging::init_logging;
    pub use crate::timing::{millis, nanos, PerfTimer, Timestamp};

    // Common external types
    pub use chrono::{DateTime, Utc};
    pub use monoio;
    pub use serde::{Deserialize, Serialize};
}
