//! Subscriber setup for the `convert` binary.

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// Handle for replacing the active filter once settings and flags are known.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Level in effect before configuration is loaded.
pub const DEFAULT_LEVEL: &str = "warn";

/// Installs the global subscriber, writing to stderr at [`DEFAULT_LEVEL`].
#[must_use]
pub fn init() -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    filter_handle
}

/// Replaces the active filter with `level`.
///
/// An unparsable level is reported and the current filter kept.
pub fn apply_level(handle: &FilterHandle, level: &str) {
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter");
            }
        }
        Err(e) => {
            tracing::warn!(level = %level, error = %e, "Invalid log level, keeping current filter");
        }
    }
}
