//! # Linked Collection
//!
//! An unbounded chain of individually owned nodes.
//!
//! ## Ownership Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  head ──► ┌────────┐ ──► ┌────────┐ ──► ┌────────┐ ──► None            │
//! │           │ Corda  │     │ Balas  │     │  Faca  │                      │
//! │           └────────┘     └────────┘     └────────┘                      │
//! │                                                                         │
//! │  Each arrow is an Option<Box<Node>>: the slot OWNS the next node.      │
//! │                                                                         │
//! │  delete("Balas"):                                                      │
//! │    1. walk slots until the slot holding "Balas"                        │
//! │    2. take the node out of that slot                                   │
//! │    3. move its successor (Faca) into the same slot                     │
//! │    4. the detached node is dropped, its record handed back             │
//! │                                                                         │
//! │  head ──► ┌────────┐ ──► ┌────────┐ ──► None                           │
//! │           │ Corda  │     │  Faca  │                                     │
//! │           └────────┘     └────────┘                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Complexity
//! - `insert_head`: O(1)
//! - `search_linear`, `delete`, `length`: O(n)
//!
//! There is no stored length; [`LinkedCollection::length`] walks the chain.

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::search::{linear_search_by_name, SearchOutcome};
use crate::types::Record;

type Link = Option<Box<Node>>;

struct Node {
    record: Record,
    next: Link,
}

/// Singly-linked collection with head insertion.
///
/// Newest records come first when iterating.
#[derive(Default)]
pub struct LinkedCollection {
    head: Link,
}

impl LinkedCollection {
    pub fn new() -> Self {
        LinkedCollection { head: None }
    }

    /// Puts `record` in a new node at the front of the chain.
    ///
    /// Node allocation aborts the process if memory is exhausted.
    pub fn insert_head(&mut self, record: Record) {
        let node = Box::new(Node {
            record,
            next: self.head.take(),
        });
        self.head = Some(node);
    }

    /// Finds the first node named `name`, counting nodes visited.
    ///
    /// The returned index is the node's position from the head.
    pub fn search_linear(&self, name: &str) -> SearchOutcome {
        linear_search_by_name(self.iter(), name)
    }

    /// Unlinks the first node named `name` and returns its record.
    ///
    /// ## Errors
    /// [`CoreError::NotFound`] when no node matches; the chain is unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use loot_core::{LinkedCollection, Record};
    ///
    /// let mut chain = LinkedCollection::new();
    /// chain.insert_head(Record::new("Faca", "arma", 1));
    /// chain.insert_head(Record::new("Corda", "util", 1));
    ///
    /// let removed = chain.delete("Faca").unwrap();
    /// assert_eq!(removed.name(), "Faca");
    /// assert_eq!(chain.length(), 1);
    /// assert!(chain.delete("Faca").is_err());
    /// ```
    pub fn delete(&mut self, name: &str) -> CoreResult<Record> {
        // Walk to the slot that owns the target (or to the terminal None).
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.record.name() != name) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }

        match link.take() {
            Some(mut removed) => {
                *link = removed.next.take();
                Ok(removed.record)
            }
            None => Err(CoreError::not_found(name)),
        }
    }

    /// Number of nodes, by full traversal.
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Releases every node. Safe to call on an empty chain, and more than once.
    pub fn teardown(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.iter().find(|r| r.name() == name)
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for LinkedCollection {
    fn drop(&mut self) {
        // Default drop would recurse once per node.
        self.teardown();
    }
}

impl fmt::Debug for LinkedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<Record> for LinkedCollection {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.insert_head(record);
        }
    }
}

/// Borrowing iterator over a [`LinkedCollection`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}

impl<'a> IntoIterator for &'a LinkedCollection {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(names: &[&str]) -> LinkedCollection {
        let mut chain = LinkedCollection::new();
        chain.extend(names.iter().map(|n| Record::new(n, "arma", 1)));
        chain
    }

    fn names(chain: &LinkedCollection) -> Vec<&str> {
        chain.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn test_insert_head_puts_newest_first() {
        let chain = chain_of(&["Faca", "Balas", "Corda"]);
        assert_eq!(names(&chain), ["Corda", "Balas", "Faca"]);
        assert_eq!(chain.length(), 3);
    }

    #[test]
    fn test_search_counts_nodes_visited() {
        let chain = chain_of(&["Faca", "Balas", "Corda"]);

        let hit = chain.search_linear("Faca");
        assert_eq!(hit.index, Some(2));
        assert_eq!(hit.comparisons, 3);

        let miss = chain.search_linear("Mapa");
        assert_eq!(miss.index, None);
        assert_eq!(miss.comparisons, 3);
        assert_eq!(chain.length(), 3);
    }

    #[test]
    fn test_delete_head_middle_tail() {
        let mut chain = chain_of(&["a", "b", "c", "d"]);
        // Order is d, c, b, a.
        assert_eq!(chain.delete("d").map(|r| r.name().to_string()), Ok("d".to_string()));
        assert_eq!(names(&chain), ["c", "b", "a"]);

        chain.delete("b").unwrap();
        assert_eq!(names(&chain), ["c", "a"]);

        chain.delete("a").unwrap();
        assert_eq!(names(&chain), ["c"]);

        chain.delete("c").unwrap();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_delete_missing() {
        let mut empty = LinkedCollection::new();
        assert_eq!(empty.delete("Faca"), Err(CoreError::not_found("Faca")));

        let mut chain = chain_of(&["a", "b"]);
        assert!(chain.delete("z").is_err());
        assert_eq!(names(&chain), ["b", "a"]);
    }

    #[test]
    fn test_delete_first_duplicate() {
        let mut chain = LinkedCollection::new();
        chain.insert_head(Record::new("Faca", "arma", 1));
        chain.insert_head(Record::new("Faca", "arma", 2));

        assert_eq!(chain.delete("Faca").map(|r| r.count()), Ok(2));
        assert_eq!(chain.find("Faca").map(Record::count), Some(1));
    }

    #[test]
    fn test_delete_relinks_successor_into_slot() {
        let mut chain = chain_of(&["a", "b", "c", "d", "e"]);
        // Order is e, d, c, b, a.
        for (target, rest) in [
            ("c", vec!["e", "d", "b", "a"]),
            ("a", vec!["e", "d", "b"]),
            ("e", vec!["d", "b"]),
        ] {
            let removed = chain.delete(target).unwrap();
            assert_eq!(removed.name(), target);
            assert_eq!(names(&chain), rest);
            assert_eq!(chain.length(), rest.len());
        }

        chain.insert_head(Record::new("f", "arma", 1));
        assert_eq!(names(&chain), ["f", "d", "b"]);
        assert_eq!(chain.search_linear("b").index, Some(2));
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let mut chain = chain_of(&["a", "b", "c"]);
        chain.teardown();
        assert_eq!(chain.length(), 0);
        chain.teardown();
        assert!(chain.is_empty());

        chain.insert_head(Record::new("again", "x", 1));
        assert_eq!(chain.length(), 1);
    }

    #[test]
    fn test_long_chain_drops_without_recursion() {
        let mut chain = LinkedCollection::new();
        for i in 0..200_000 {
            chain.insert_head(Record::new(&i.to_string(), "x", 1));
        }
        assert_eq!(chain.length(), 200_000);
        drop(chain);
    }

    #[test]
    fn test_debug_lists_records() {
        let chain = chain_of(&["Faca"]);
        assert!(format!("{:?}", chain).contains("Faca"));
    }
}
