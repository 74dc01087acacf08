//! Cache error types

/// Cache error types
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    // Fingerprinting errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;
