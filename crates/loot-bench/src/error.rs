//! # Bench Error Types
//!
//! ```text
//! ConfigError ──┐
//! CoreError ────┼──► BenchError ──► main() ──► stderr, exit code 1
//! serde_json ───┘
//! ```

use loot_core::sort::UnknownStrategy;
use loot_core::CoreError;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Capacity must be greater than zero")]
    ZeroCapacity,

    /// More items requested than the collection can hold.
    #[error("Item count {item_count} exceeds capacity {capacity}")]
    TooManyItems { item_count: usize, capacity: usize },

    #[error("At least one sort strategy must be configured")]
    NoStrategies,

    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),
}

/// Errors surfaced by a bench run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Collection error: {0}")]
    Core(#[from] CoreError),

    #[error("Report serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary search landed on a record with a different name than linear search.
    #[error("Binary search disagrees with linear search for '{name}'")]
    SearchMismatch { name: String },
}

/// Convenience type alias for Results with BenchError.
pub type BenchResult<T> = Result<T, BenchError>;
