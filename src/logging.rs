//! Diagnostic logging setup.
//!
//! User-facing progress goes through `ProgressReporter`; this is the
//! developer-facing `tracing` output, filtered by `NAC_COMPARE_LOG`
//! (for example `NAC_COMPARE_LOG=debug` or `NAC_COMPARE_LOG=nac_compare=trace`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "NAC_COMPARE_LOG";

/// Filter used when the variable is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Builds the filter from `NAC_COMPARE_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
