//! # Searching
//!
//! Name lookups shared by both collections. Every search reports how many
//! name comparisons it performed alongside its result, so callers can compare
//! strategies without any shared counter.
//!
//! ## Linear vs Binary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LINEAR                             │  BINARY                           │
//! │  ──────                             │  ──────                           │
//! │  • Any order                        │  • Sorted ascending by name ONLY  │
//! │  • 1 comparison per element seen    │  • 1 comparison per bisection     │
//! │  • Finds FIRST match                │  • Finds SOME match               │
//! │  • O(n)                             │  • O(log n)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Record;

/// The result of a search plus the comparisons it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Position of the match, `None` when absent.
    pub index: Option<usize>,
    /// Name comparisons performed.
    pub comparisons: u64,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }

    /// Converts a miss into [`CoreError::NotFound`] for `name`.
    ///
    /// ## Example
    /// ```rust
    /// use loot_core::{ArrayCollection, CoreError};
    ///
    /// let backpack = ArrayCollection::backpack();
    /// let err = backpack.search_linear("Faca").into_result("Faca").unwrap_err();
    /// assert!(matches!(err, CoreError::NotFound { .. }));
    /// ```
    pub fn into_result(self, name: &str) -> CoreResult<usize> {
        self.index.ok_or_else(|| CoreError::not_found(name))
    }
}

/// Scans records in order, counting one comparison per record examined.
pub fn linear_search_by_name<'a, I>(records: I, name: &str) -> SearchOutcome
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut comparisons = 0;
    for (index, record) in records.into_iter().enumerate() {
        comparisons += 1;
        if record.name() == name {
            return SearchOutcome {
                index: Some(index),
                comparisons,
            };
        }
    }

    SearchOutcome {
        index: None,
        comparisons,
    }
}

/// Iterative bisection over records sorted ascending by name.
///
/// ## Precondition
/// `records` must be sorted ascending by name (byte-wise). This is NOT
/// checked in release builds: an unsorted slice gives a wrong answer, not a
/// panic. Debug builds assert it.
///
/// ## Counting
/// One comparison per loop iteration, including the one that matches.
pub fn binary_search_by_name(records: &[Record], name: &str) -> SearchOutcome {
    debug_assert!(
        is_sorted_by_name(records),
        "binary search requires records sorted by name"
    );

    let mut comparisons = 0;
    if records.is_empty() {
        return SearchOutcome {
            index: None,
            comparisons,
        };
    }

    let mut lo = 0usize;
    let mut hi = records.len() - 1;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        comparisons += 1;

        let current = records[mid].name();
        if current == name {
            return SearchOutcome {
                index: Some(mid),
                comparisons,
            };
        }

        if name > current {
            lo = mid + 1;
        } else {
            // hi = mid - 1, stopping once the range falls off the left edge
            match mid.checked_sub(1) {
                Some(next) => hi = next,
                None => break,
            }
        }
    }

    SearchOutcome {
        index: None,
        comparisons,
    }
}

/// Returns true when every adjacent pair of names is non-decreasing.
pub fn is_sorted_by_name(records: &[Record]) -> bool {
    records.windows(2).all(|w| w[0].name() <= w[1].name())
}

// =============================================================================
// Unit Tests
// =============================================================================
