//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the SkillUp tracing/logging system.
///
/// Reads the `SKILLUP_LOG` environment variable for per-subsystem log
/// levels, e.g. `SKILLUP_LOG=skillup_storage=debug,skillup_services=info`.
/// Falls back to `skillup=info` when unset or invalid.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SKILLUP_LOG")
            .unwrap_or_else(|_| EnvFilter::new("skillup=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
