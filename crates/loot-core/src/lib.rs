//! # loot-core: Pure Inventory Data Structures
//!
//! This crate holds every collection and algorithm of Loot Inventory as pure,
//! synchronous code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Loot Inventory Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Presentation layer (menus, prompts, tables)            │   │
//! │  │          parses input, prints results - NOT in this crate       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ parsed values in, results out          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ loot-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   array   │  │  linked   │  │   sort    │  │   │
//! │  │   │  Record   │  │ Backpack  │  │   Chain   │  │ Strategy  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │  search   │  │ telemetry │  │ validation│                 │   │
//! │  │   │ lin / bin │  │  timing   │  │ text caps │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 loot-bench (telemetry driver)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The [`Record`] value type
//! - [`array`] - Fixed-capacity [`ArrayCollection`]
//! - [`linked`] - Unbounded [`LinkedCollection`]
//! - [`sort`] - Bubble / insertion / selection sorts and [`SortStrategy`]
//! - [`search`] - Linear and binary search with comparison counts
//! - [`telemetry`] - Timing wrapper around sorts
//! - [`validation`] - Text bounding for record fields
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Counts are values**: every search and sort returns its own comparison
//!    count; nothing is accumulated in shared state
//! 2. **Binary search is a contract**: it assumes name order and says so
//! 3. **Explicit Errors**: full collections and misses are typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use loot_core::{ArrayCollection, Record};
//!
//! let mut backpack = ArrayCollection::backpack();
//! backpack.insert(Record::new("Faca", "arma", 1)).unwrap();
//! backpack.insert(Record::new("Bandagem", "cura", 3)).unwrap();
//!
//! let stats = backpack.sort_by_name();
//! assert_eq!(stats.comparisons, 1);
//!
//! let hit = backpack.search_binary("Faca");
//! assert_eq!(hit.index, Some(1));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod array;
pub mod error;
pub mod linked;
pub mod search;
pub mod sort;
pub mod telemetry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use array::ArrayCollection;
pub use error::{CoreError, CoreResult};
pub use linked::LinkedCollection;
pub use search::SearchOutcome;
pub use sort::{SortStats, SortStrategy};
pub use telemetry::{measure, measure_sort, SortReport};
pub use types::Record;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum characters kept in an item name.
pub const MAX_NAME_LEN: usize = 29;

/// Maximum characters kept in an item category.
pub const MAX_CATEGORY_LEN: usize = 19;

/// Slots in the survival backpack.
pub const BACKPACK_CAPACITY: usize = 10;

/// Slots in the component kit.
pub const COMPONENT_CAPACITY: usize = 20;

/// Lowest component priority.
pub const MIN_PRIORITY: u8 = 1;

/// Highest component priority.
pub const MAX_PRIORITY: u8 = 10;
