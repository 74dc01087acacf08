//! Telemetry metric name constants.
//!
//! Centralised metric names for cache operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `mbta_cache_`. Counters end in `_total`.

/// Total cache hits recorded by callers via [`ResponseCache::record`](crate::ResponseCache::record).
pub const CACHE_HITS_TOTAL: &str = "mbta_cache_hits_total";

/// Total cache misses recorded by callers via [`ResponseCache::record`](crate::ResponseCache::record).
pub const CACHE_MISSES_TOTAL: &str = "mbta_cache_misses_total";

/// Total LRU evictions performed during size enforcement.
pub const CACHE_EVICTIONS_TOTAL: &str = "mbta_cache_evictions_total";

/// Total entries inserted or overwritten.
pub const CACHE_STORES_TOTAL: &str = "mbta_cache_stores_total";
