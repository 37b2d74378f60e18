//! # Sort Strategies
//!
//! Three in-place comparison sorts, each bound to one key.
//!
//! ## Strategy Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Strategy     │ Key       │ Order      │ Counts            │ Stable     │
//! │  ──────────── │ ───────── │ ────────── │ ───────────────── │ ────────── │
//! │  Bubble       │ name      │ ascending  │ pairs, swaps      │ yes        │
//! │  Insertion    │ category  │ ascending  │ pairs, shifts     │ yes        │
//! │  Selection    │ priority  │ DESCENDING │ pairs, swaps      │ no         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function returns its own [`SortStats`]. One comparison is counted per
//! pair of elements examined, never per swap. Slices of length 0 or 1 are left
//! alone with zero comparisons.
//!
//! ## Usage
//! ```rust
//! use loot_core::sort::bubble_sort_by_name;
//! use loot_core::Record;
//!
//! let mut items = vec![
//!     Record::new("zeta", "arma", 1),
//!     Record::new("alpha", "cura", 1),
//!     Record::new("mike", "arma", 1),
//! ];
//! let stats = bubble_sort_by_name(&mut items);
//!
//! let names: Vec<&str> = items.iter().map(|r| r.name()).collect();
//! assert_eq!(names, ["alpha", "mike", "zeta"]);
//! assert_eq!(stats.comparisons, 3);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Record;

// =============================================================================
// Sort Statistics
// =============================================================================

/// Work performed by one sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    /// Element pairs examined.
    pub comparisons: u64,
    /// Swaps (bubble, selection) or right-shifts (insertion).
    pub swaps: u64,
}

// =============================================================================
// Strategy Selection
// =============================================================================

/// The closed set of sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Bubble sort, ascending by name. Enables binary search.
    BubbleByName,
    /// Insertion sort, ascending by category.
    InsertionByCategory,
    /// Selection sort, descending by priority.
    SelectionByPriorityDesc,
}

impl SortStrategy {
    /// Every strategy, in menu order.
    pub const ALL: [SortStrategy; 3] = [
        SortStrategy::BubbleByName,
        SortStrategy::InsertionByCategory,
        SortStrategy::SelectionByPriorityDesc,
    ];

    /// Sorts `records` in place with this strategy.
    pub fn sort(self, records: &mut [Record]) -> SortStats {
        match self {
            SortStrategy::BubbleByName => bubble_sort_by_name(records),
            SortStrategy::InsertionByCategory => insertion_sort_by_category(records),
            SortStrategy::SelectionByPriorityDesc => selection_sort_by_priority_desc(records),
        }
    }

    /// Returns true if the result is ordered by name (binary search is valid).
    pub fn orders_by_name(self) -> bool {
        matches!(self, SortStrategy::BubbleByName)
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStrategy::BubbleByName => write!(f, "bubble_by_name"),
            SortStrategy::InsertionByCategory => write!(f, "insertion_by_category"),
            SortStrategy::SelectionByPriorityDesc => write!(f, "selection_by_priority_desc"),
        }
    }
}

/// Returned when a strategy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort strategy: '{0}'. Valid options: name, category, priority")]
pub struct UnknownStrategy(pub String);

impl FromStr for SortStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "bubble" | "bubble_by_name" => Ok(SortStrategy::BubbleByName),
            "category" | "insertion" | "insertion_by_category" => {
                Ok(SortStrategy::InsertionByCategory)
            }
            "priority" | "selection" | "selection_by_priority_desc" => {
                Ok(SortStrategy::SelectionByPriorityDesc)
            }
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

// =============================================================================
// Algorithms
// =============================================================================

/// Bubble sort, ascending by name.
///
/// Each pass bubbles the largest remaining name to the end and shrinks the
/// upper bound by one. Stops after a pass that makes no swap.
pub fn bubble_sort_by_name(records: &mut [Record]) -> SortStats {
    let mut stats = SortStats::default();
    let mut bound = records.len();

    while bound > 1 {
        let mut swapped = false;
        for j in 0..bound - 1 {
            stats.comparisons += 1;
            if records[j].name() > records[j + 1].name() {
                records.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        bound -= 1;
    }

    stats
}

/// Insertion sort, ascending by category.
///
/// Greater elements are shifted right one slot at a time; the held record is
/// dropped into the gap. Equal categories keep their original order.
pub fn insertion_sort_by_category(records: &mut [Record]) -> SortStats {
    let mut stats = SortStats::default();

    for i in 1..records.len() {
        // Find the gap for records[i] by scanning left past greater categories.
        let mut gap = i;
        while gap > 0 {
            stats.comparisons += 1;
            if records[gap - 1].category() > records[i].category() {
                stats.swaps += 1;
                gap -= 1;
            } else {
                break;
            }
        }

        // Shift records[gap..i] right one slot and drop the held record into the gap.
        if gap < i {
            records[gap..=i].rotate_right(1);
        }
    }

    stats
}

/// Selection sort, descending by priority.
///
/// Picks the highest priority in the unsorted suffix and swaps it to the front
/// of that suffix. Ties keep the earliest candidate; the long-range swap makes
/// the result unstable.
pub fn selection_sort_by_priority_desc(records: &mut [Record]) -> SortStats {
    let mut stats = SortStats::default();
    let len = records.len();

    for i in 0..len.saturating_sub(1) {
        let mut max = i;
        for j in i + 1..len {
            stats.comparisons += 1;
            if records[j].priority_rank() > records[max].priority_rank() {
                max = j;
            }
        }
        if max != i {
            records.swap(i, max);
            stats.swaps += 1;
        }
    }

    stats
}

// =============================================================================
// Unit Tests
// =============================================================================
