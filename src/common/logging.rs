//! Logging and tracing configuration
//!
//! The user-facing `==> name` / `PASS name` / summary lines are plain
//! stdout because they are part of the greppable output contract;
//! tracing carries the diagnostics (resolved config, simulator argv).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the CLI binaries (stdout logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable.
/// Default level is WARN so diagnostics stay out of the test output
/// unless asked for.
pub fn init_cli() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sim_harness=warn,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
