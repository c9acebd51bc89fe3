//! Comparator capability and ordering modes.
//!
//! This module defines how elements of a [`BinarySearchSet`] are ordered:
//!
//! - [`Comparable`]: a type's natural ordering plus a case-insensitive variant
//! - [`OrderingMode`]: selects which of the two orderings a set uses
//! - [`Scalar`]: a tagged element that mixes integers, floats and text in one set
//!
//! # Built-in Implementations
//!
//! | Type                                  | `compare_to`        | `compare_to_ignore_case`        |
//! |---------------------------------------|---------------------|---------------------------------|
//! | integers (`i8`..`i128`, `u8`..`u128`) | `Ord::cmp`          | same as `compare_to`            |
//! | `f32`, `f64`                          | IEEE total order    | same as `compare_to`            |
//! | `char`                                | `Ord::cmp`          | compares lower-case expansions  |
//! | `str`, `String`, `Box<str>`, ...      | lexicographic       | compares lower-case expansions  |
//!
//! Numeric comparisons never depend on the mode. Floats use
//! [`f64::total_cmp`], so `NaN` has a fixed position and a set of floats
//! always stays strictly sorted.
//!
//! # Examples
//!
//! ```rust
//! use binary_search_set::ordering::{Comparable, OrderingMode};
//! use std::cmp::Ordering;
//!
//! assert_eq!("apple".compare_to("APPLE"), Ordering::Greater);
//! assert_eq!("apple".compare_to_ignore_case("APPLE"), Ordering::Equal);
//!
//! assert_eq!(OrderingMode::CaseSensitive.compare("a", "B"), Ordering::Greater);
//! assert_eq!(OrderingMode::CaseInsensitive.compare("a", "B"), Ordering::Less);
//! ```
//!
//! [`BinarySearchSet`]: crate::set::BinarySearchSet

mod scalar;

pub use scalar::Scalar;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A type with a natural ordering and a case-insensitive variant of it.
///
/// Implementors must provide a total order through [`compare_to`]. Types
/// without a notion of letter case keep the default
/// [`compare_to_ignore_case`], which delegates to [`compare_to`].
///
/// # Laws
///
/// For both comparison methods and all `a`, `b`, `c`:
///
/// - `a.cmp(b) == b.cmp(a).reverse()`
/// - `a.cmp(b) == Less` and `b.cmp(c) == Less` implies `a.cmp(c) == Less`
///
/// # Examples
///
/// ```rust
/// use binary_search_set::ordering::Comparable;
/// use std::cmp::Ordering;
///
/// struct Version {
///     major: u32,
///     minor: u32,
/// }
///
/// impl Comparable for Version {
///     fn compare_to(&self, other: &Self) -> Ordering {
///         (self.major, self.minor).cmp(&(other.major, other.minor))
///     }
/// }
///
/// let old = Version { major: 1, minor: 4 };
/// let new = Version { major: 2, minor: 0 };
/// assert_eq!(old.compare_to(&new), Ordering::Less);
/// assert_eq!(old.compare_to_ignore_case(&new), Ordering::Less);
/// ```
///
/// [`compare_to`]: Comparable::compare_to
/// [`compare_to_ignore_case`]: Comparable::compare_to_ignore_case
pub trait Comparable {
    /// Compares `self` with `other` under the natural (case-sensitive) ordering.
    fn compare_to(&self, other: &Self) -> Ordering;

    /// Compares `self` with `other` ignoring letter case.
    ///
    /// The default implementation delegates to [`compare_to`](Comparable::compare_to).
    #[inline]
    fn compare_to_ignore_case(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

/// Selects which ordering of a [`Comparable`] element a set uses.
///
/// The default is [`OrderingMode::CaseInsensitive`].
///
/// # Examples
///
/// ```rust
/// use binary_search_set::ordering::OrderingMode;
/// use std::cmp::Ordering;
///
/// assert_eq!(OrderingMode::default(), OrderingMode::CaseInsensitive);
/// assert_eq!(OrderingMode::CaseInsensitive.compare("Kiwi", "kiwi"), Ordering::Equal);
/// assert_ne!(OrderingMode::CaseSensitive.compare("Kiwi", "kiwi"), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrderingMode {
    /// Uses [`Comparable::compare_to`].
    CaseSensitive,
    /// Uses [`Comparable::compare_to_ignore_case`].
    #[default]
    CaseInsensitive,
}

impl OrderingMode {
    /// Compares two elements under this mode.
    #[inline]
    pub fn compare<T: Comparable + ?Sized>(self, left: &T, right: &T) -> Ordering {
        match self {
            Self::CaseSensitive => left.compare_to(right),
            Self::CaseInsensitive => left.compare_to_ignore_case(right),
        }
    }

    /// Returns `true` if `left` and `right` fall into the same equivalence
    /// class under this mode.
    #[inline]
    pub fn equivalent<T: Comparable + ?Sized>(self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }

    /// Returns `true` if every adjacent pair of `elements` is strictly
    /// increasing under this mode.
    pub fn is_strictly_sorted<T: Comparable>(self, elements: &[T]) -> bool {
        elements
            .windows(2)
            .all(|window| self.compare(&window[0], &window[1]) == Ordering::Less)
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaseSensitive => write!(formatter, "case-sensitive"),
            Self::CaseInsensitive => write!(formatter, "case-insensitive"),
        }
    }
}

// =============================================================================
// Built-in Implementations
// =============================================================================

macro_rules! impl_comparable_for_ord {
    ($($type:ty),* $(,)?) => {
        $(
            impl Comparable for $type {
                #[inline]
                fn compare_to(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_comparable_for_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Comparable for f32 {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Comparable for f64 {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Comparable for char {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    #[inline]
    fn compare_to_ignore_case(&self, other: &Self) -> Ordering {
        self.to_lowercase().cmp(other.to_lowercase())
    }
}

impl Comparable for str {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }

    fn compare_to_ignore_case(&self, other: &Self) -> Ordering {
        self.chars()
            .flat_map(char::to_lowercase)
            .cmp(other.chars().flat_map(char::to_lowercase))
    }
}

macro_rules! impl_comparable_for_text {
    ($($type:ty),* $(,)?) => {
        $(
            impl Comparable for $type {
                #[inline]
                fn compare_to(&self, other: &Self) -> Ordering {
                    <str as Comparable>::compare_to(self, other)
                }

                #[inline]
                fn compare_to_ignore_case(&self, other: &Self) -> Ordering {
                    <str as Comparable>::compare_to_ignore_case(self, other)
                }
            }
        )*
    };
}

impl_comparable_for_text!(String, Box<str>, Rc<str>, Arc<str>, Cow<'_, str>);

impl<T: Comparable + ?Sized> Comparable for &T {
    #[inline]
    fn compare_to(&self, other: &Self) -> Ordering {
        T::compare_to(*self, *other)
    }

    #[inline]
    fn compare_to_ignore_case(&self, other: &Self) -> Ordering {
        T::compare_to_ignore_case(*self, *other)
    }
}

// =============================================================================
// Tests
// =============================================================================
