//! # Error Types
//!
//! Domain-specific error types for loot-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  loot-core errors (this file)                                          │
//! │  └── CoreError        - Collection operation failures                  │
//! │                                                                         │
//! │  loot-bench errors (separate crate)                                    │
//! │  ├── ConfigError      - Bad environment values                         │
//! │  └── BenchError       - What the driver reports                        │
//! │                                                                         │
//! │  Flow: CoreError → BenchError → stderr                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, capacity)
//! 3. Errors are enum variants, never String
//! 4. A miss is an expected outcome, so `NotFound` is a plain variant
//!
//! ## Allocation Failure
//! Node allocation in [`LinkedCollection`](crate::linked::LinkedCollection)
//! goes through the global allocator, which aborts the process when memory
//! cannot be obtained. That abort is the terminal condition, so there is no
//! variant for it here.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Collection operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The array-backed collection is full.
    ///
    /// ## When This Occurs
    /// - `insert` while `len == capacity`
    ///
    /// The collection is left untouched; the caller decides whether to drop
    /// the item or free a slot and retry.
    #[error("Collection is full: capacity {capacity} reached")]
    CapacityExceeded { capacity: usize },

    /// No record with the given name exists.
    ///
    /// ## When This Occurs
    /// - `delete` of an absent name (or on an empty collection)
    /// - Converting a missed [`SearchOutcome`](crate::search::SearchOutcome)
    ///   into a `Result`
    #[error("Item not found: {name}")]
    NotFound { name: String },
}

impl CoreError {
    /// Creates a NotFound error for the given item name.
    pub fn not_found(name: impl Into<String>) -> Self {
        CoreError::NotFound { name: name.into() }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
