//! Property tests for collection and ordering invariants.

use loot_core::{ArrayCollection, CoreError, LinkedCollection, Record, SortStrategy};
use proptest::prelude::*;

fn record() -> impl Strategy<Value = Record> {
    ("[a-e]{1,3}", "[a-c]{1,2}", 0i32..100, 1u8..=10)
        .prop_map(|(name, category, count, priority)| {
            Record::component(&name, &category, count, priority)
        })
}

fn records(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 0..=max)
}

fn filled(records: &[Record]) -> ArrayCollection {
    let mut pack = ArrayCollection::component_kit();
    for record in records {
        pack.insert(record.clone()).unwrap();
    }
    pack
}

proptest! {
    #[test]
    fn delete_removes_one_and_keeps_order(items in records(20), pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let mut pack = filled(&items);
        let target = items[pick.index(items.len())].name().to_string();

        let first = items.iter().position(|r| r.name() == target).unwrap();
        let removed = pack.delete(&target).unwrap();

        let mut expected = items.clone();
        let expected_removed = expected.remove(first);
        prop_assert_eq!(removed, expected_removed);
        prop_assert_eq!(pack.as_slice(), &expected[..]);
    }

    #[test]
    fn delete_absent_is_not_found_and_unchanged(items in records(20)) {
        let mut pack = filled(&items);
        let before = pack.clone();
        // Generated names only use a-e.
        let result = pack.delete("zzz");
        prop_assert_eq!(result, Err(CoreError::not_found("zzz")));
        prop_assert_eq!(pack, before);
    }

    #[test]
    fn insert_past_capacity_is_rejected(items in records(8), extra in record()) {
        let mut pack = ArrayCollection::new(items.len());
        for record in &items {
            pack.insert(record.clone()).unwrap();
        }
        let result = pack.insert(extra);
        prop_assert_eq!(result, Err(CoreError::CapacityExceeded { capacity: items.len() }));
        prop_assert_eq!(pack.len(), items.len());
    }

    #[test]
    fn sort_by_name_orders_adjacent_pairs(items in records(20)) {
        let mut pack = filled(&items);
        pack.sort_by_name();
        for pair in pack.as_slice().windows(2) {
            prop_assert!(pair[0].name() <= pair[1].name());
        }
    }

    #[test]
    fn every_strategy_is_a_permutation(items in records(20)) {
        for strategy in SortStrategy::ALL {
            let mut pack = filled(&items);
            pack.apply_strategy(strategy);

            let mut sorted_input = items.clone();
            let mut sorted_output = pack.as_slice().to_vec();
            sorted_input.sort_by(|a, b| (a.name(), a.category(), a.count(), a.priority())
                .cmp(&(b.name(), b.category(), b.count(), b.priority())));
            sorted_output.sort_by(|a, b| (a.name(), a.category(), a.count(), a.priority())
                .cmp(&(b.name(), b.category(), b.count(), b.priority())));
            prop_assert_eq!(sorted_input, sorted_output);
        }
    }

    #[test]
    fn category_and_priority_orders_hold(items in records(20)) {
        let mut by_category = filled(&items);
        by_category.sort_by_category();
        for pair in by_category.as_slice().windows(2) {
            prop_assert!(pair[0].category() <= pair[1].category());
        }

        let mut by_priority = filled(&items);
        by_priority.sort_by_priority_descending();
        for pair in by_priority.as_slice().windows(2) {
            prop_assert!(pair[0].priority_rank() >= pair[1].priority_rank());
        }
    }

    #[test]
    fn bubble_comparisons_bounded(items in records(20)) {
        let n = items.len() as u64;
        let mut pack = filled(&items);
        let stats = pack.sort_by_name();
        prop_assert!(stats.comparisons <= n * n.saturating_sub(1) / 2);
        // The first pass always examines every adjacent pair.
        prop_assert!(stats.comparisons >= n.saturating_sub(1));
    }

    #[test]
    fn binary_agrees_with_linear_on_sorted(items in records(20), probe in "[a-f]{1,3}") {
        let mut pack = filled(&items);
        pack.sort_by_name();

        for record in pack.as_slice() {
            let linear = pack.search_linear(record.name()).index.unwrap();
            let binary = pack.search_binary(record.name()).index.unwrap();
            // Duplicates may land on another equal name.
            prop_assert_eq!(pack.as_slice()[binary].name(), pack.as_slice()[linear].name());
        }

        let linear = pack.search_linear(&probe);
        let binary = pack.search_binary(&probe);
        prop_assert_eq!(linear.is_found(), binary.is_found());
    }

    #[test]
    fn insert_then_delete_all_empties_both(items in records(20), order in any::<u64>()) {
        let mut pack = filled(&items);
        let mut chain = LinkedCollection::new();
        chain.extend(items.iter().cloned());

        let mut names: Vec<String> = items.iter().map(|r| r.name().to_string()).collect();
        // Deterministic shuffle driven by the generated seed.
        let len = names.len().max(1) as u64;
        names.rotate_left((order % len) as usize);
        if order % 2 == 0 {
            names.reverse();
        }

        for name in &names {
            prop_assert!(pack.delete(name).is_ok());
            prop_assert!(chain.delete(name).is_ok());
        }
        prop_assert!(pack.is_empty());
        prop_assert_eq!(chain.length(), 0);
        prop_assert!(chain.is_empty());
    }
}

#[test]
fn binary_search_on_unique_names_matches_linear_index() {
    let mut kit = ArrayCollection::component_kit();
    for name in ["Rotor", "Bateria", "Chip", "Antena", "Motor", "Sensor"] {
        kit.insert(Record::component(name, "peca", 1, 5)).unwrap();
    }
    kit.sort_by_name();

    for record in kit.iter() {
        assert_eq!(
            kit.search_binary(record.name()).index,
            kit.search_linear(record.name()).index
        );
    }
    assert_eq!(kit.search_binary("Zeppelin").index, None);
}

#[test]
fn linked_teardown_then_length_is_zero() {
    let mut chain = LinkedCollection::new();
    chain.insert_head(Record::new("Faca", "arma", 1));
    chain.insert_head(Record::new("Corda", "util", 2));

    chain.teardown();
    assert_eq!(chain.length(), 0);
    chain.teardown();
    assert_eq!(chain.length(), 0);
}
