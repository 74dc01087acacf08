//! The bounded LRU response store.
//!
//! [`ResponseCache`] owns the ordered fingerprint → entry mapping, the
//! size-enforcement policy, and the public API. It is single-task by
//! construction: every operation takes `&mut self`, runs to completion,
//! and never suspends. Callers that share a cache across tasks wrap it
//! in their own mutex.
//!
//! # Counter attribution
//!
//! [`lookup`](ResponseCache::lookup) is query-only over the store: it
//! promotes the entry in the LRU chain but does **not** record a hit or
//! miss. The caller attributes the outcome via
//! [`record`](ResponseCache::record), which keeps "checked the cache but
//! did not use the hit" distinguishable from a real hit. Evictions and
//! size updates are recorded internally by
//! [`store`](ResponseCache::store).

use std::sync::Arc;

use lru::LruCache;
use serde::Serialize;

use crate::config::CacheConfig;
use crate::entry::{CacheEntry, now_secs};
use crate::error::{CacheError, Result};
use crate::fingerprint::{Fingerprint, fingerprint};
use crate::sink::{ReportSink, TracingSink};
use crate::stats::{CacheEvent, CacheStats, StatsSnapshot};
use crate::telemetry;

/// Bounded LRU mapping from request fingerprints to cached responses.
///
/// The payload type `V` is opaque to the cache and returned by clone.
/// Capacity is enforced on insertion: when the mapping would exceed
/// `max_size`, least-recently-used entries are evicted until it fits.
pub struct ResponseCache<V> {
    entries: LruCache<Fingerprint, CacheEntry<V>>,
    max_size: usize,
    stats: Option<CacheStats>,
    sink: Arc<dyn ReportSink>,
}

impl<V> std::fmt::Debug for ResponseCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("len", &self.entries.len())
            .field("max_size", &self.max_size)
            .field("stats_enabled", &self.stats.is_some())
            .finish_non_exhaustive()
    }
}

impl<V: Clone> ResponseCache<V> {
    /// Create a cache from the given configuration, reporting through
    /// `tracing`.
    ///
    /// Fails with [`CacheError::Configuration`] when `max_size` is 0.
    pub fn new(config: &CacheConfig) -> Result<Self> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create a cache that reports through the supplied sink.
    pub fn with_sink(config: &CacheConfig, sink: Arc<dyn ReportSink>) -> Result<Self> {
        if config.max_size == 0 {
            return Err(CacheError::Configuration(
                "max_size must be positive".to_string(),
            ));
        }
        let stats = config.stats_enabled.then(|| {
            CacheStats::new(config.max_size, config.report_interval, Arc::clone(&sink))
        });
        Ok(Self {
            entries: LruCache::unbounded(),
            max_size: config.max_size,
            stats,
            sink,
        })
    }

    /// Compute the fingerprint for a request without touching the store.
    ///
    /// Exposed for debugging; equivalent to the free
    /// [`fingerprint`](crate::fingerprint()) function.
    pub fn fingerprint<P: Serialize>(&self, path: &str, params: Option<&P>) -> Result<Fingerprint> {
        fingerprint(path, params)
    }

    /// Look up a cached response.
    ///
    /// On a hit, the entry becomes the most-recently-used item and a
    /// clone of it is returned. A miss is in-band (`Ok(None)`), not an
    /// error. Neither outcome records a counter event — see the module
    /// docs on counter attribution.
    pub fn lookup<P: Serialize>(
        &mut self,
        path: &str,
        params: Option<&P>,
    ) -> Result<Option<CacheEntry<V>>> {
        let key = fingerprint(path, params)?;
        match self.entries.get(&key) {
            Some(entry) => {
                self.sink.debug(&format!("cache hit for {path} ({key})"));
                Ok(Some(entry.clone()))
            }
            None => {
                self.sink.debug(&format!("cache miss for {path} ({key})"));
                Ok(None)
            }
        }
    }

    /// Insert or overwrite a cached response.
    ///
    /// The entry becomes the most-recently-used item. Least-recently-used
    /// entries are evicted (and recorded) until the mapping fits
    /// `max_size`. Returns the entry's `inserted_at` timestamp.
    pub fn store<P: Serialize>(
        &mut self,
        path: &str,
        params: Option<&P>,
        payload: V,
        last_modified: Option<String>,
    ) -> Result<f64> {
        let key = fingerprint(path, params)?;
        let inserted_at = now_secs();
        self.entries.put(
            key.clone(),
            CacheEntry {
                payload,
                inserted_at,
                last_modified,
            },
        );

        while self.entries.len() > self.max_size {
            let Some((evicted, _)) = self.entries.pop_lru() else {
                break;
            };
            metrics::counter!(telemetry::CACHE_EVICTIONS_TOTAL).increment(1);
            self.sink.debug(&format!("evicted LRU entry {evicted}"));
            if let Some(stats) = &mut self.stats {
                stats.record(CacheEvent::Eviction, None);
            }
        }

        metrics::counter!(telemetry::CACHE_STORES_TOTAL).increment(1);
        let size = self.entries.len();
        if let Some(stats) = &mut self.stats {
            stats.record(CacheEvent::Update, Some(size));
        }
        self.sink.debug(&format!("stored {path} ({key})"));
        Ok(inserted_at)
    }

    /// Record a counter event.
    ///
    /// Callers attribute `Hit`/`Miss` here after deciding whether a
    /// lookup result was actually used. No-op when statistics are
    /// disabled, except that hit/miss telemetry counters are always
    /// emitted.
    pub fn record(&mut self, event: CacheEvent, size: Option<usize>) {
        match event {
            CacheEvent::Hit => metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1),
            CacheEvent::Miss => metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1),
            CacheEvent::Eviction | CacheEvent::Update => {}
        }
        if let Some(stats) = &mut self.stats {
            stats.record(event, size);
        }
    }

    /// Emit a final statistics report, then drain the mapping.
    ///
    /// Counters keep their lifetime totals; only `entries` drops to 0.
    pub fn clear(&mut self) {
        if let Some(stats) = &self.stats {
            self.sink.info(&stats.format_report());
        }
        self.entries.clear();
        if let Some(stats) = &mut self.stats {
            stats.record(CacheEvent::Update, Some(0));
        }
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a request is cached, without promoting it in the LRU chain.
    pub fn contains<P: Serialize>(&self, path: &str, params: Option<&P>) -> Result<bool> {
        let key = fingerprint(path, params)?;
        Ok(self.entries.contains(&key))
    }

    /// Copy the current counter values; `None` when statistics are
    /// disabled.
    pub fn stats(&self) -> Option<StatsSnapshot> {
        self.stats.as_ref().map(CacheStats::snapshot)
    }

    /// Render the statistics report; `None` when statistics are disabled.
    pub fn format_report(&self) -> Option<String> {
        self.stats.as_ref().map(CacheStats::format_report)
    }
}
