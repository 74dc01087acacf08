//! Request fingerprinting.
//!
//! A [`Fingerprint`] is the primary cache key: the lowercase-hex SHA-256
//! digest of the canonical JSON form of `{"params": params or {}, "path":
//! path}`. Canonical JSON sorts object keys lexicographically at every
//! nesting level, so two requests with the same path and value-equal
//! parameters produce byte-identical fingerprints regardless of key order.
//!
//! Fingerprints are stable across processes and externally reproducible:
//! `sha256sum` over the canonical JSON bytes yields the same hex string.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Deterministic cache key for a `(path, params)` request pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// The lowercase-hex digest string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the fingerprint for a request.
///
/// Pure function; touches neither the store nor the counters. Absent
/// (or JSON `null`) params canonicalize to an empty object. Params are
/// converted through [`serde_json::Value`], whose object maps keep keys
/// sorted, which gives canonical ordering at every nesting level.
///
/// Fails only when `params` cannot be represented as JSON (e.g. a map
/// with non-string keys); that is a programmer error and propagates.
pub fn fingerprint<P: Serialize>(path: &str, params: Option<&P>) -> Result<Fingerprint> {
    let params = match params {
        Some(p) => match serde_json::to_value(p)? {
            Value::Null => Value::Object(Map::new()),
            value => value,
        },
        None => Value::Object(Map::new()),
    };

    let mut canonical = Map::new();
    canonical.insert("params".to_string(), params);
    canonical.insert("path".to_string(), Value::String(path.to_string()));

    let bytes = serde_json::to_vec(&Value::Object(canonical))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(Fingerprint(format!("{:x}", hasher.finalize())))
}
