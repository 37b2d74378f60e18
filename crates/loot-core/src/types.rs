//! # Domain Types
//!
//! The single value type stored by every collection in this crate.
//!
//! ## Record Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Record                                       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   name          │   │   category      │   │   count         │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  ≤ 29 chars     │   │  ≤ 19 chars     │   │  i32            │       │
//! │  │  search key     │   │  "arma", "cura" │   │  units carried  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │   priority      │   Only set on component records.                  │
//! │  │  ─────────────  │   1 (low) ... 10 (high).                          │
//! │  │  Option<u8>     │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A record has no identity beyond its `name`. Names are treated as keys but
//! uniqueness is never enforced; lookups act on the first match.

use serde::{Deserialize, Serialize};

use crate::validation::{normalize_category, normalize_name};

// =============================================================================
// Record
// =============================================================================

/// An item carried in an inventory.
///
/// Fields are private: a record is immutable once built and can only be
/// replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    name: String,
    category: String,
    count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<u8>,
}

impl Record {
    /// Creates a backpack item (no priority).
    ///
    /// Text is normalized: one trailing line ending is stripped and the value
    /// is cut to its maximum length.
    ///
    /// ## Example
    /// ```rust
    /// use loot_core::Record;
    ///
    /// let item = Record::new("Faca\n", "arma", 1);
    /// assert_eq!(item.name(), "Faca");
    /// assert_eq!(item.priority(), None);
    /// ```
    pub fn new(name: &str, category: &str, count: i32) -> Self {
        Record {
            name: normalize_name(name),
            category: normalize_category(category),
            count,
            priority: None,
        }
    }

    /// Creates a component item with a priority (1 = low, 10 = high).
    ///
    /// The priority range is a convention of the caller and is stored as given.
    pub fn component(name: &str, category: &str, count: i32, priority: u8) -> Self {
        Record {
            priority: Some(priority),
            ..Record::new(name, category, count)
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn count(&self) -> i32 {
        self.count
    }

    #[inline]
    pub fn priority(&self) -> Option<u8> {
        self.priority
    }

    /// Priority used for ordering. Records without one rank lowest.
    #[inline]
    pub fn priority_rank(&self) -> u8 {
        self.priority.unwrap_or(0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
