//! Logging bootstrap for hosts embedding the trainer.
//!
//! Set `VOCAB_DEBUG_LOGGING=1` to get debug output from the workspace crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub const DEBUG_LOGGING_ENV: &str = "VOCAB_DEBUG_LOGGING";

/// Filter directive for the given verbosity.
#[must_use]
pub fn filter_directive(debug: bool) -> &'static str {
    if debug {
        "info,services=debug,storage=debug,vocab_core=debug"
    } else {
        "info"
    }
}

/// Installs a stdout subscriber.
///
/// Returns false if a global subscriber was already set; the existing one is
/// kept.
pub fn init(debug: bool) -> bool {
    let debug_logging = debug || std::env::var(DEBUG_LOGGING_ENV).is_ok();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let installed = tracing_subscriber::registry()
        .with(stdout_layer)
        .with(EnvFilter::new(filter_directive(debug_logging)))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(debug_logging, "logging initialized");
    }
    installed
}
