//! Process-wide logging for the Inventix binaries.

pub mod tracing;

pub use crate::tracing::LogFormat;

/// Install the global subscriber using `RUST_LOG` and `INVENTIX_LOG_FORMAT`.
///
/// Calling it again once a subscriber is installed does nothing.
pub fn init() {
    tracing::init();
}
