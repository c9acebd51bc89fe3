//! # binary-search-set
//!
//! A sorted, duplicate-free set stored in one contiguous sequence and
//! searched by binary search.
//!
//! ## Overview
//!
//! - **Ordering**: the [`Comparable`](ordering::Comparable) trait gives every
//!   element type a natural ordering and a case-insensitive variant;
//!   [`OrderingMode`](ordering::OrderingMode) picks one per set
//! - **Set engine**: [`BinarySearchSet`](set::BinarySearchSet) with
//!   insertion-point search, set algebra and restartable cursors
//! - **Mixed elements**: [`Scalar`](ordering::Scalar) holds integers, floats
//!   and text in a single set
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for sets, ordering modes and scalars
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use binary_search_set::prelude::*;
//!
//! let mut fruits = BinarySearchSet::new();
//! fruits.add("banana");
//! fruits.add("Apple");
//! fruits.add("cherry");
//!
//! assert!(fruits.contains(&"APPLE"));
//! assert!(!fruits.add("BANANA"));
//! assert_eq!(fruits.to_string(), "{Apple, banana, cherry}");
//!
//! let mut strict = BinarySearchSet::with_mode(OrderingMode::CaseSensitive);
//! strict.extend(["banana", "BANANA"]);
//! assert_eq!(strict.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use binary_search_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ordering::{Comparable, OrderingMode, Scalar};
    pub use crate::set::{BinarySearchSet, SearchResult, SetError, SortedSet};
}

pub mod ordering;
pub mod set;
