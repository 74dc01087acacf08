//! The stored cache record.

use std::time::{SystemTime, UNIX_EPOCH};

/// A cached response body plus the metadata needed to validate it
/// against the upstream origin.
///
/// The payload is opaque to the cache and returned by clone. Lookups
/// reorder the entry in the LRU chain but never touch `inserted_at`.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Response body as supplied by the caller; never inspected.
    pub payload: V,
    /// Wall-clock seconds since the Unix epoch at store time. Callers
    /// use this to apply their own freshness policy.
    pub inserted_at: f64,
    /// Opaque `Last-Modified` token to echo back in conditional
    /// requests; absent when the origin sent none.
    pub last_modified: Option<String>,
}

/// Current wall-clock time in seconds since the Unix epoch.
///
/// A clock before the epoch yields 0.0 rather than panicking.
pub(crate) fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
