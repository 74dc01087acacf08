//! mbta-cache - Bounded LRU cache for MBTA API responses
//!
//! This crate provides an in-process [`ResponseCache`] keyed by a stable
//! fingerprint of `(path, params)`, with exact LRU eviction, conditional
//! request metadata (`Last-Modified`), hit/miss/eviction counters, and a
//! periodic statistics report. The HTTP client lives elsewhere: it asks
//! the cache before issuing a request, attributes the hit or miss itself,
//! and stores the response body after fetching.
//!
//! # Example
//!
//! ```rust
//! use mbta_cache::{CacheConfig, CacheEvent, ResponseCache};
//! use serde_json::json;
//!
//! fn main() -> mbta_cache::Result<()> {
//!     let mut cache: ResponseCache<String> = ResponseCache::new(&CacheConfig::default())?;
//!     let params = json!({"filter[route]": "Red"});
//!
//!     match cache.lookup("/predictions", Some(&params))? {
//!         Some(entry) => {
//!             cache.record(CacheEvent::Hit, None);
//!             println!("cached at {}: {}", entry.inserted_at, entry.payload);
//!         }
//!         None => {
//!             cache.record(CacheEvent::Miss, None);
//!             // ...fetch from the API, then:
//!             let body = String::from("{\"data\": []}");
//!             let last_modified = Some("Wed, 29 Jan 2025 14:00:00 GMT".to_string());
//!             cache.store("/predictions", Some(&params), body, last_modified)?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod fingerprint;
pub mod sink;
pub mod stats;
pub mod store;
pub mod telemetry;

// Re-export main types at crate root
pub use config::CacheConfig;
pub use entry::CacheEntry;
pub use error::{CacheError, Result};
pub use fingerprint::{Fingerprint, fingerprint};
pub use sink::{ReportSink, TracingSink};
pub use stats::{CacheEvent, CacheStats, StatsSnapshot};
pub use store::ResponseCache;
