//! Logging setup for binaries and tests embedding WAYPOINT.
//!
//! The core itself only emits `tracing` events; subscriber ownership
//! belongs to the embedding application. This helper wires up a console
//! subscriber with env-filter support for hosts that do not bring their
//! own.
//!
//! ## Example
//!
//! ```
//! waypoint_core::logging::init_logging(false);
//! tracing::debug!(task_id = 7, "computing priority");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize console logging.
///
/// Respects `RUST_LOG` when set; otherwise defaults to `INFO`, or `DEBUG`
/// when `verbose` is true. Safe to call more than once: subsequent calls
/// are no-ops because a global subscriber is already installed.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("waypoint={}", default_level)));

    // try_init rather than init: embedding tests may already have a
    // subscriber installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(false);
        init_logging(true);
        tracing::debug!("still alive after double init");
    }
}
