//! Property-based tests for BinarySearchSet laws.
//!
//! These tests verify the ordering invariants of the backing sequence and
//! the algebraic properties of the set operations.

use binary_search_set::ordering::OrderingMode;
use binary_search_set::set::{BinarySearchSet, SearchResult};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn ordering_mode() -> impl Strategy<Value = OrderingMode> {
    prop_oneof![
        Just(OrderingMode::CaseSensitive),
        Just(OrderingMode::CaseInsensitive)
    ]
}

#[derive(Debug, Clone)]
enum Operation {
    Add(String),
    Remove(String),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        "[a-cA-C]{1,3}".prop_map(Operation::Add),
        "[a-cA-C]{1,3}".prop_map(Operation::Remove),
    ]
}

// =============================================================================
// Sortedness Law
// Description: Adjacent elements are strictly increasing after any sequence
// of additions and removals
// =============================================================================

proptest! {
    #[test]
    fn prop_sortedness_law(
        mode in ordering_mode(),
        operations in prop::collection::vec(operation(), 0..80)
    ) {
        let mut set = BinarySearchSet::with_mode(mode);
        for operation in operations {
            match operation {
                Operation::Add(text) => { set.add(text); }
                Operation::Remove(text) => { set.remove(&text); }
            }
            prop_assert!(mode.is_strictly_sorted(set.as_slice()));
        }
    }
}

// =============================================================================
// No-Duplicates Law
// Description: Adding an element equal to a member never increases the count
// =============================================================================

proptest! {
    #[test]
    fn prop_no_duplicates_law(
        mode in ordering_mode(),
        words in prop::collection::vec("[a-dA-D]{1,2}", 1..40)
    ) {
        let mut set = BinarySearchSet::from_elements_with_mode(words.clone(), mode);
        for word in words {
            let before = set.len();
            prop_assert!(!set.add(word.to_uppercase()) || mode == OrderingMode::CaseSensitive);
            prop_assert!(!set.add(word));
            prop_assert!(set.len() <= before + 1);
        }
    }
}

// =============================================================================
// Round-Trip Membership Law
// Description: add(x) then contains(x); add(x), remove(x) then !contains(x)
// =============================================================================

proptest! {
    #[test]
    fn prop_round_trip_membership_law(
        elements in prop::collection::vec(any::<i64>(), 0..50),
        element: i64
    ) {
        let mut set = BinarySearchSet::from_elements(elements);
        set.add(element);
        prop_assert!(set.contains(&element));

        prop_assert!(set.remove(&element));
        prop_assert!(!set.contains(&element));
    }
}

// =============================================================================
// Add Idempotence Law
// Description: add(x); add(x) equals add(x) and the second call returns false
// =============================================================================

proptest! {
    #[test]
    fn prop_add_idempotence_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        element: i32
    ) {
        let mut once = BinarySearchSet::from_elements(elements);
        once.add(element);
        let mut twice = once.clone();

        prop_assert!(!twice.add(element));
        prop_assert_eq!(twice, once);
    }
}

// =============================================================================
// Search Law
// Description: An insertion point keeps the sequence sorted; a found index
// holds an equal element
// =============================================================================

proptest! {
    #[test]
    fn prop_search_law(
        elements in prop::collection::vec(-100i32..100, 0..50),
        target in -120i32..120
    ) {
        let set = BinarySearchSet::from_elements(elements);
        match set.search(&target) {
            SearchResult::Found(index) => prop_assert_eq!(set.get(index), Some(&target)),
            SearchResult::InsertionPoint(index) => {
                let slice = set.as_slice();
                prop_assert!(slice[..index].iter().all(|element| *element < target));
                prop_assert!(slice[index..].iter().all(|element| *element > target));
            }
        }
    }
}

// =============================================================================
// Model Law
// Description: Contents match a BTreeSet fed the same integers
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_btree_set_model(elements in prop::collection::vec(any::<i16>(), 0..100)) {
        let set: BinarySearchSet<i16> = elements.iter().copied().collect();
        let model: BTreeSet<i16> = elements.into_iter().collect();

        prop_assert_eq!(set.into_vec(), model.into_iter().collect::<Vec<_>>());
    }
}

// =============================================================================
// Union Bound Law
// Description: |A ∪ B| <= |A| + |B|
// =============================================================================

proptest! {
    #[test]
    fn prop_union_bound_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a = BinarySearchSet::from_elements(elements_a);
        let set_b = BinarySearchSet::from_elements(elements_b);

        let union = set_a.union(&set_b);

        prop_assert!(union.len() <= set_a.len() + set_b.len());
        prop_assert!(union.has_subset(&set_a));
        prop_assert!(union.has_subset(&set_b));
    }
}

// =============================================================================
// Intersection Subset Law
// Description: A ∩ B is a subset of both A and B
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_subset_law(
        elements_a in prop::collection::vec(0i32..40, 0..30),
        elements_b in prop::collection::vec(0i32..40, 0..30)
    ) {
        let set_a = BinarySearchSet::from_elements(elements_a);
        let set_b = BinarySearchSet::from_elements(elements_b);

        let intersection = set_a.intersection(&set_b);

        prop_assert!(set_a.has_subset(&intersection));
        prop_assert!(set_b.has_subset(&intersection));
    }
}

// =============================================================================
// Difference Disjointness Law
// Description: (A \ B) ∩ B = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_disjoint_law(
        elements_a in prop::collection::vec(0i32..40, 0..30),
        elements_b in prop::collection::vec(0i32..40, 0..30)
    ) {
        let set_a = BinarySearchSet::from_elements(elements_a);
        let set_b = BinarySearchSet::from_elements(elements_b);

        let difference = set_a.difference(&set_b);

        prop_assert!(difference.intersection(&set_b).is_empty());
        prop_assert!(set_a.has_subset(&difference));
    }
}

// =============================================================================
// Partition Law
// Description: |A ∩ B| + |A \ B| = |A|
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_law(
        elements_a in prop::collection::vec(0i32..40, 0..30),
        elements_b in prop::collection::vec(0i32..40, 0..30)
    ) {
        let set_a = BinarySearchSet::from_elements(elements_a);
        let set_b = BinarySearchSet::from_elements(elements_b);

        prop_assert_eq!(
            set_a.intersection(&set_b).len() + set_a.difference(&set_b).len(),
            set_a.len()
        );
    }
}

// =============================================================================
// Clone Equality Law
// Description: A.equals(A.clone())
// =============================================================================

proptest! {
    #[test]
    fn prop_clone_equality_law(
        mode in ordering_mode(),
        words in prop::collection::vec("[a-zA-Z]{0,4}", 0..30)
    ) {
        let set = BinarySearchSet::from_elements_with_mode(words, mode);
        prop_assert!(set.equals(&set.clone()));
    }
}

// =============================================================================
// Reorder Law
// Description: After reorder, the set is sorted under the new mode and the
// kept plus evicted elements account for every previous element
// =============================================================================

proptest! {
    #[test]
    fn prop_reorder_law(words in prop::collection::vec("[a-cA-C]{1,2}", 0..30)) {
        let mut set = BinarySearchSet::from_elements_with_mode(words, OrderingMode::CaseSensitive);
        let before = set.len();

        let evicted = set.reorder(OrderingMode::CaseInsensitive);

        prop_assert!(OrderingMode::CaseInsensitive.is_strictly_sorted(set.as_slice()));
        prop_assert_eq!(set.len() + evicted.len(), before);
        for word in &evicted {
            prop_assert!(set.contains(word));
        }
    }
}
