//! Tracing setup for the gate runner.
//!
//! All gate output the operator sees comes from the child processes
//! themselves; the runner's own logging is limited to step lifecycle
//! events (start, pass, fail) emitted through `tracing`. This module
//! owns the one-time subscriber installation for the CLI.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `level` is the default filter and can be overridden at runtime via
/// the `RUST_LOG` environment variable. With `json` set, log lines are
/// emitted as JSON objects for machine consumption; otherwise a plain
/// fmt layer is used. Targets are suppressed in both modes.
///
/// Safe to call more than once: if a subscriber is already installed
/// the first one wins and later calls are no-ops (`try_init`'s error
/// is discarded).
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false))
            .try_init()
            .ok();
    }
}
