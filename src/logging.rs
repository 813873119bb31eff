//! Subscriber setup for binaries built on this crate.

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

/// Directive used when `RUST_LOG` is unset or empty.
pub const DEFAULT_DIRECTIVE: &str = "gridworld=info";

/// Filter from a `RUST_LOG` value, falling back to [`DEFAULT_DIRECTIVE`].
///
/// A user supplied value fully replaces the default, so
/// `RUST_LOG=gridworld=trace` enables step tracing.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(spec) => EnvFilter::try_new(spec).unwrap_or_else(|err| {
            warn!(%spec, %err, "ignoring malformed RUST_LOG");
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }),
        None => EnvFilter::new(DEFAULT_DIRECTIVE),
    }
}

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
pub fn init() {
    let rust_log = std::env::var("RUST_LOG").ok();
    fmt().with_env_filter(env_filter(rust_log.as_deref())).init();
}
