//! Logger seam.
//!
//! The cache reports through a [`ReportSink`] rather than calling a
//! logging framework directly, so tests (and embedders with their own
//! logging story) can capture the emitted lines. The default
//! [`TracingSink`] forwards to `tracing`; without a subscriber installed
//! every call is a no-op, which makes it the process-wide null sink.

use tracing::{debug, info};

/// Destination for free-form diagnostic lines at DEBUG and INFO.
///
/// Calls are synchronous and must not block; the cache holds no state
/// about what was emitted.
pub trait ReportSink: Send + Sync {
    /// Emit a line at DEBUG level.
    fn debug(&self, line: &str);
    /// Emit a line at INFO level.
    fn info(&self, line: &str);
}

/// Default sink backed by the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn debug(&self, line: &str) {
        debug!("{line}");
    }

    fn info(&self, line: &str) {
        info!("{line}");
    }
}
