//! Cache construction parameters.

/// Configuration for [`ResponseCache`](crate::ResponseCache).
///
/// ```rust
/// # use mbta_cache::CacheConfig;
/// let config = CacheConfig::new()
///     .max_size(128)
///     .report_interval(250);
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached entries. Default: 512.
    pub max_size: usize,
    /// Whether hit/miss/eviction counters are maintained. Default: true.
    pub stats_enabled: bool,
    /// Number of lookups (hits + misses) between statistics reports;
    /// 0 disables periodic reporting. Default: 1,000.
    pub report_interval: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: 512,
            stats_enabled: true,
            report_interval: 1_000,
        }
    }
}

impl CacheConfig {
    /// Create a new config with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of cached entries.
    pub fn max_size(mut self, n: usize) -> Self {
        self.max_size = n;
        self
    }

    /// Enable or disable statistics tracking.
    pub fn stats_enabled(mut self, enabled: bool) -> Self {
        self.stats_enabled = enabled;
        self
    }

    /// Set the number of lookups between statistics reports (0 disables).
    pub fn report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }
}
