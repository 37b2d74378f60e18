//! # Array Collection
//!
//! A fixed-capacity, order-preserving inventory (the backpack).
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  capacity = 10                                                          │
//! │                                                                         │
//! │   0        1        2        3                                          │
//! │  ┌──────┐ ┌──────┐ ┌──────┐ ┌──────┐ ┌ ─ ─ ─ ┐ ┌ ─ ─ ─ ┐               │
//! │  │ Faca │ │Balas │ │ Kit  │ │Corda │   free      free     ...          │
//! │  └──────┘ └──────┘ └──────┘ └──────┘ └ ─ ─ ─ ┘ └ ─ ─ ─ ┘               │
//! │  ◄──────────── len = 4 ────────────►                                   │
//! │                                                                         │
//! │  delete("Balas"):  Kit and Corda each move one slot left               │
//! │                                                                         │
//! │  ┌──────┐ ┌──────┐ ┌──────┐                                            │
//! │  │ Faca │ │ Kit  │ │Corda │                                            │
//! │  └──────┘ └──────┘ └──────┘                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sorted-by-name Flag
//! The collection remembers whether its last mutation was a by-name sort.
//! Inserting, deleting, or sorting by another key clears the flag. Callers
//! check [`ArrayCollection::is_sorted_by_name`] before choosing
//! [`ArrayCollection::search_binary`].

use crate::error::{CoreError, CoreResult};
use crate::search::{binary_search_by_name, linear_search_by_name, SearchOutcome};
use crate::sort::{SortStats, SortStrategy};
use crate::types::Record;
use crate::{BACKPACK_CAPACITY, COMPONENT_CAPACITY};

/// Fixed-capacity collection of records in insertion order.
///
/// ## Invariants
/// - `len() <= capacity()`
/// - Records keep their relative order across deletes
/// - `is_sorted_by_name()` implies the records are ordered by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayCollection {
    items: Vec<Record>,
    capacity: usize,
    sorted_by_name: bool,
}

impl ArrayCollection {
    /// Creates an empty collection holding at most `capacity` records.
    pub fn new(capacity: usize) -> Self {
        ArrayCollection {
            items: Vec::with_capacity(capacity),
            capacity,
            sorted_by_name: false,
        }
    }

    /// The survival backpack: 10 slots.
    pub fn backpack() -> Self {
        ArrayCollection::new(BACKPACK_CAPACITY)
    }

    /// The component kit: 20 slots.
    pub fn component_kit() -> Self {
        ArrayCollection::new(COMPONENT_CAPACITY)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Appends a record at the end.
    ///
    /// ## Errors
    /// [`CoreError::CapacityExceeded`] when the collection is full. Nothing is
    /// changed in that case.
    ///
    /// ## Example
    /// ```rust
    /// use loot_core::{ArrayCollection, CoreError, Record};
    ///
    /// let mut pack = ArrayCollection::new(1);
    /// pack.insert(Record::new("Faca", "arma", 1)).unwrap();
    ///
    /// let err = pack.insert(Record::new("Corda", "util", 1)).unwrap_err();
    /// assert_eq!(err, CoreError::CapacityExceeded { capacity: 1 });
    /// assert_eq!(pack.len(), 1);
    /// ```
    pub fn insert(&mut self, record: Record) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.items.push(record);
        self.sorted_by_name = false;
        Ok(())
    }

    /// Removes the first record named `name` and returns it.
    ///
    /// Every later record moves one slot left, so order is preserved.
    ///
    /// ## Errors
    /// [`CoreError::NotFound`] when no record has that name. Nothing is
    /// changed in that case.
    pub fn delete(&mut self, name: &str) -> CoreResult<Record> {
        let pos = self.search_linear(name).into_result(name)?;

        let removed = self.items.remove(pos);
        self.sorted_by_name = false;
        Ok(removed)
    }

    // =========================================================================
    // Searching
    // =========================================================================

    /// Finds the first record named `name`, scanning from the front.
    pub fn search_linear(&self, name: &str) -> SearchOutcome {
        linear_search_by_name(&self.items, name)
    }

    /// Bisection search by name.
    ///
    /// ## Precondition
    /// The records must be sorted ascending by name, e.g. right after
    /// [`sort_by_name`](Self::sort_by_name). Violating this gives an
    /// unspecified answer in release builds; the collection is never re-sorted
    /// behind the caller's back. Debug builds assert sortedness.
    ///
    /// ## Example
    /// ```rust
    /// use loot_core::{ArrayCollection, Record};
    ///
    /// let mut kit = ArrayCollection::component_kit();
    /// for name in ["Motor", "Chip", "Antena"] {
    ///     kit.insert(Record::component(name, "peca", 1, 5)).unwrap();
    /// }
    /// kit.sort_by_name();
    /// assert!(kit.is_sorted_by_name());
    ///
    /// let hit = kit.search_binary("Motor");
    /// assert_eq!(hit.index, Some(2));
    /// ```
    pub fn search_binary(&self, name: &str) -> SearchOutcome {
        binary_search_by_name(&self.items, name)
    }

    /// Returns the first record named `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.search_linear(name).index.map(|i| &self.items[i])
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Bubble sort by name. Sets the sorted-by-name flag.
    pub fn sort_by_name(&mut self) -> SortStats {
        self.apply_strategy(SortStrategy::BubbleByName)
    }

    /// Insertion sort by category. Clears the sorted-by-name flag.
    pub fn sort_by_category(&mut self) -> SortStats {
        self.apply_strategy(SortStrategy::InsertionByCategory)
    }

    /// Selection sort by priority, highest first. Clears the sorted-by-name flag.
    pub fn sort_by_priority_descending(&mut self) -> SortStats {
        self.apply_strategy(SortStrategy::SelectionByPriorityDesc)
    }

    /// Sorts with `strategy` and updates the sorted-by-name flag.
    pub fn apply_strategy(&mut self, strategy: SortStrategy) -> SortStats {
        let stats = strategy.sort(&mut self.items);
        self.sorted_by_name = strategy.orders_by_name();
        stats
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True only between a by-name sort and the next mutation.
    #[inline]
    pub fn is_sorted_by_name(&self) -> bool {
        self.sorted_by_name
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.items
    }

    /// Sum of `count` over every record.
    pub fn total_count(&self) -> i64 {
        self.items.iter().map(|r| i64::from(r.count())).sum()
    }
}

impl<'a> IntoIterator for &'a ArrayCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
