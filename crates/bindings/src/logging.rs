//! Logging setup for foreign callers.
//!
//! The core crate only emits `tracing` events. Hosts that want to see them
//! call [`init_logging`] (or `rv_init_logging` over the C ABI) once; the
//! filter comes from `RVDISASS_LOG` in `EnvFilter` syntax, e.g.
//! `RVDISASS_LOG=rvdisass_core=trace`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RVDISASS_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs a `fmt` subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// C entry point for [`init_logging`]. Safe to call more than once.
#[unsafe(no_mangle)]
pub extern "C" fn rv_init_logging() {
    if !init_logging() {
        tracing::debug!("logging already initialised");
    }
}
