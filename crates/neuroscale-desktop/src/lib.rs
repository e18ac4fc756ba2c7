//! neuroscale-desktop library root.
//!
//! The application shell the UI talks to: app config, logging setup and
//! the command layer over the scorer and the record store.

pub mod commands;
pub mod config;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filter from `RUST_LOG`, default `info`. `NEUROSCALE_LOG_FORMAT=json`
/// switches to JSON lines. Calling this twice is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("NEUROSCALE_LOG_FORMAT")
        .is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let result = if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };
    if let Err(e) = result {
        tracing::debug!("tracing already initialised: {e}");
    }
}
