//! Tracing/logging shared setup.

/// Logging configuration (file sink + read-only-filesystem fallback).
pub mod logging;

pub use logging::{LogGuard, LogSink};

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> LogGuard {
    logging::init()
}
