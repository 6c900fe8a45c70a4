//! Unified logging setup
//!
//! All crates log through `tracing`; initialization happens once per process.
//! The optional `ftlog-backend` feature swaps in ftlog's buffered writer for
//! latency-sensitive deployments.

use std::sync::Once;
#[cfg(not(feature = "ftlog-backend"))]
use tracing_subscriber::{EnvFilter, FmtSubscriber};

static INIT: Once = Once::new();

/// Initialize the process-wide logging subscriber
pub fn init_logging() {
    INIT.call_once(|| {
        #[cfg(feature = "ftlog-backend")]
        {
            init_ftlog();
        }

        #[cfg(not(feature = "ftlog-backend"))]
        {
            init_tracing();
        }
    });
}

#[cfg(feature = "ftlog-backend")]
fn init_ftlog() {
    ftlog::builder()
        .max_log_level(ftlog::LevelFilter::Debug)
        .bounded(100_000, false) // 100k buffer, non-blocking
        .utc()
        .build()
        .expect("Failed to initialize ftlog");

    tracing::info!("initialized ftlog logging backend");
}

#[cfg(not(feature = "ftlog-backend"))]
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
