//! Integration tests for Display and Debug implementations.

use binary_search_set::ordering::{OrderingMode, Scalar};
use binary_search_set::set::{BinarySearchSet, SetError};

// =============================================================================
// Set Display Tests
// =============================================================================

#[test]
fn test_empty_set_display() {
    let set: BinarySearchSet<i32> = BinarySearchSet::new();
    assert_eq!(format!("{set}"), "{}");
}

#[test]
fn test_single_element_set_display() {
    let set = BinarySearchSet::from_elements([42]);
    assert_eq!(format!("{set}"), "{42}");
}

#[test]
fn test_set_display_is_ascending() {
    let set = BinarySearchSet::from_elements([3, 1, 2]);
    assert_eq!(format!("{set}"), "{1, 2, 3}");
}

#[test]
fn test_string_set_display_keeps_representatives() {
    let set = BinarySearchSet::from_elements(["pear", "Apple", "APPLE"]);
    assert_eq!(format!("{set}"), "{Apple, pear}");
}

#[test]
fn test_set_debug_quotes_strings() {
    let set = BinarySearchSet::from_elements(["b", "a"]);
    assert_eq!(format!("{set:?}"), r#"{"a", "b"}"#);
}

#[test]
fn test_scalar_set_display() {
    let set = BinarySearchSet::from_elements([
        Scalar::from("x"),
        Scalar::from(1.5),
        Scalar::from(-2),
    ]);
    assert_eq!(format!("{set}"), "{-2, 1.5, x}");
}

// =============================================================================
// Mode and Error Display Tests
// =============================================================================

#[test]
fn test_ordering_mode_display() {
    assert_eq!(format!("{}", OrderingMode::CaseSensitive), "case-sensitive");
    assert_eq!(format!("{}", OrderingMode::CaseInsensitive), "case-insensitive");
}

#[test]
fn test_set_error_display() {
    let error = SetError::InvalidInput {
        operation: "BinarySearchSet::from_sorted_vec",
        reason: "element at index 1 is not greater than its predecessor".to_string(),
    };
    assert_eq!(
        format!("{error}"),
        "BinarySearchSet::from_sorted_vec: invalid input: element at index 1 is not greater than its predecessor"
    );
}
