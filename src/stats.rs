//! Hit/miss/eviction counters and the periodic statistics report.

use std::sync::Arc;

use serde::Serialize;

use crate::sink::ReportSink;

/// Counter events recorded against the cache.
///
/// `Hit` and `Miss` are attributed by the caller (see
/// [`ResponseCache::record`](crate::ResponseCache::record)); `Eviction`
/// and `Update` are recorded internally during size enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEvent {
    /// A lookup was satisfied from the cache.
    Hit,
    /// A lookup found no entry.
    Miss,
    /// The LRU head was removed during size enforcement.
    Eviction,
    /// An entry was inserted or overwritten; carries the new mapping size.
    Update,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Lookups attributed as hits.
    pub hits: u64,
    /// Lookups attributed as misses.
    pub misses: u64,
    /// Entries removed by size enforcement.
    pub evictions: u64,
    /// Current mapping size.
    pub entries: usize,
    /// Configured capacity.
    pub max_size: usize,
}

/// Lifetime counters for one cache, with periodic reporting.
///
/// Every `report_interval` lookups (hits + misses) the formatted report
/// is emitted through the sink at INFO level. Counters are lifetime
/// totals; only `entries` tracks current state.
pub struct CacheStats {
    hits: u64,
    misses: u64,
    evictions: u64,
    entries: usize,
    max_size: usize,
    report_interval: usize,
    sink: Arc<dyn ReportSink>,
}

impl CacheStats {
    /// Create zeroed counters for a cache of the given capacity.
    pub fn new(max_size: usize, report_interval: usize, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            hits: 0,
            misses: 0,
            evictions: 0,
            entries: 0,
            max_size,
            report_interval,
            sink,
        }
    }

    /// Apply one counter event.
    ///
    /// `size` is only meaningful for [`CacheEvent::Update`], where the
    /// caller supplies the post-insertion mapping size.
    pub fn record(&mut self, event: CacheEvent, size: Option<usize>) {
        match event {
            CacheEvent::Hit => self.hits += 1,
            CacheEvent::Miss => self.misses += 1,
            CacheEvent::Eviction => {
                self.evictions += 1;
                self.entries = self.entries.saturating_sub(1);
            }
            CacheEvent::Update => {
                if let Some(size) = size {
                    self.entries = size;
                }
            }
        }

        if matches!(event, CacheEvent::Hit | CacheEvent::Miss) {
            self.maybe_report();
        }
    }

    /// Render the statistics report.
    ///
    /// ```text
    /// MBTA Cache Stats:
    /// |██░░░░░░░░| 25% hit rate (1/4)
    /// |█████░░░░░| 50% usage (4/8)
    /// 3 evictions
    /// ```
    ///
    /// The evictions line is present only when at least one eviction
    /// occurred. Zero denominators render as 0%.
    pub fn format_report(&self) -> String {
        let requests = self.hits + self.misses;
        let entries = self.entries as u64;
        let max_size = self.max_size as u64;

        let mut report = String::from("MBTA Cache Stats:\n");
        report.push_str(&format!(
            "{} {}% hit rate ({}/{})\n",
            bar(self.hits, requests),
            percent(self.hits, requests),
            self.hits,
            requests,
        ));
        report.push_str(&format!(
            "{} {}% usage ({}/{})",
            bar(entries, max_size),
            percent(entries, max_size),
            entries,
            max_size,
        ));
        if self.evictions > 0 {
            report.push_str(&format!("\n{} evictions", self.evictions));
        }
        report
    }

    /// Copy the current counter values.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            entries: self.entries,
            max_size: self.max_size,
        }
    }

    fn maybe_report(&self) {
        if self.report_interval == 0 {
            return;
        }
        let requests = self.hits + self.misses;
        if requests > 0 && requests % self.report_interval as u64 == 0 {
            self.sink.info(&self.format_report());
        }
    }
}

/// Ten-cell usage bar: `filled = ⌊numerator·10 / denominator⌋`, clamped
/// to the bar width.
fn bar(numerator: u64, denominator: u64) -> String {
    let filled = if denominator == 0 {
        0
    } else {
        ((numerator * 10 / denominator).min(10)) as usize
    };
    format!("|{}{}|", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Integer-truncated percentage, 0 when the denominator is 0.
fn percent(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        0
    } else {
        numerator * 100 / denominator
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        infos: Mutex<Vec<String>>,
    }

    impl ReportSink for RecordingSink {
        fn debug(&self, _line: &str) {}

        fn info(&self, line: &str) {
            self.infos.lock().unwrap().push(line.to_string());
        }
    }

    fn make_stats(max_size: usize, report_interval: usize) -> (CacheStats, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let stats = CacheStats::new(max_size, report_interval, sink.clone());
        (stats, sink)
    }

    #[test]
    fn hit_and_miss_increment_counters() {
        let (mut stats, _) = make_stats(8, 0);
        stats.record(CacheEvent::Hit, None);
        stats.record(CacheEvent::Hit, None);
        stats.record(CacheEvent::Miss, None);

        let snap = stats.snapshot();
        assert_eq!(snap.hits, 2);
        assert_eq!(snap.misses, 1);
    }

    #[test]
    fn update_sets_entries_to_supplied_size() {
        let (mut stats, _) = make_stats(8, 0);
        stats.record(CacheEvent::Update, Some(5));
        assert_eq!(stats.snapshot().entries, 5);

        // Missing size leaves entries unchanged
        stats.record(CacheEvent::Update, None);
        assert_eq!(stats.snapshot().entries, 5);
    }

    #[test]
    fn eviction_decrements_entries_and_floors_at_zero() {
        let (mut stats, _) = make_stats(8, 0);
        stats.record(CacheEvent::Update, Some(1));
        stats.record(CacheEvent::Eviction, None);
        stats.record(CacheEvent::Eviction, None);

        let snap = stats.snapshot();
        assert_eq!(snap.evictions, 2);
        assert_eq!(snap.entries, 0);
    }

    #[test]
    fn report_renders_bars_and_percentages() {
        let (mut stats, _) = make_stats(8, 0);
        stats.record(CacheEvent::Hit, None);
        stats.record(CacheEvent::Miss, None);
        stats.record(CacheEvent::Miss, None);
        stats.record(CacheEvent::Miss, None);
        stats.record(CacheEvent::Update, Some(4));
        stats.record(CacheEvent::Eviction, None);
        stats.record(CacheEvent::Eviction, None);
        stats.record(CacheEvent::Eviction, None);
        stats.record(CacheEvent::Update, Some(4));

        assert_eq!(
            stats.format_report(),
            "MBTA Cache Stats:\n\
             |██░░░░░░░░| 25% hit rate (1/4)\n\
             |█████░░░░░| 50% usage (4/8)\n\
             3 evictions"
        );
    }

    #[test]
    fn report_with_no_requests_shows_zero_rate() {
        let (stats, _) = make_stats(8, 0);
        assert_eq!(
            stats.format_report(),
            "MBTA Cache Stats:\n\
             |░░░░░░░░░░| 0% hit rate (0/0)\n\
             |░░░░░░░░░░| 0% usage (0/8)"
        );
    }

    #[test]
    fn report_guards_zero_capacity() {
        let (mut stats, _) = make_stats(0, 0);
        stats.record(CacheEvent::Update, Some(3));
        assert!(stats.format_report().contains("0% usage (3/0)"));
    }

    #[test]
    fn report_omits_evictions_line_when_none() {
        let (stats, _) = make_stats(8, 0);
        assert!(!stats.format_report().contains("evictions"));
    }

    #[test]
    fn full_hit_rate_fills_the_bar() {
        let (mut stats, _) = make_stats(8, 0);
        stats.record(CacheEvent::Hit, None);
        assert!(stats.format_report().contains("|██████████| 100% hit rate (1/1)"));
    }

    #[test]
    fn reports_every_interval_lookups() {
        let (mut stats, sink) = make_stats(8, 4);
        for _ in 0..3 {
            stats.record(CacheEvent::Miss, None);
        }
        assert!(sink.infos.lock().unwrap().is_empty());

        stats.record(CacheEvent::Miss, None);
        assert_eq!(sink.infos.lock().unwrap().len(), 1);

        for _ in 0..4 {
            stats.record(CacheEvent::Hit, None);
        }
        assert_eq!(sink.infos.lock().unwrap().len(), 2);
    }

    #[test]
    fn zero_interval_never_reports() {
        let (mut stats, sink) = make_stats(8, 0);
        for _ in 0..100 {
            stats.record(CacheEvent::Miss, None);
        }
        assert!(sink.infos.lock().unwrap().is_empty());
    }

    #[test]
    fn non_lookup_events_do_not_trigger_reports() {
        let (mut stats, sink) = make_stats(8, 1);
        stats.record(CacheEvent::Update, Some(1));
        stats.record(CacheEvent::Eviction, None);
        assert!(sink.infos.lock().unwrap().is_empty());
    }
}
