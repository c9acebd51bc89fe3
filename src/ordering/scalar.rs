//! Mixed-kind set elements.
//!
//! [`Scalar`] lets a single set hold integers, floats and text side by side.
//! The relative order between kinds is fixed:
//!
//! ```text
//!     Integer / Float  (compared numerically)  <  Text  (compared per mode)
//! ```

use std::cmp::Ordering;
use std::fmt;

use super::Comparable;

/// An integer, floating point or text element.
///
/// Integers and floats compare by exact numeric value, so `Integer(1)` and
/// `Float(1.0)` are the same set member, while `Integer(2^53 + 1)` stays
/// distinct from `Float(2^53)`. `-0.0` equals `0.0`. Every number sorts before every
/// text value. Text compares case-sensitively or case-insensitively
/// depending on the set's [`OrderingMode`](super::OrderingMode).
///
/// # Examples
///
/// ```rust
/// use binary_search_set::ordering::Scalar;
/// use binary_search_set::set::BinarySearchSet;
///
/// let mut set = BinarySearchSet::new();
/// set.add(Scalar::from("pear"));
/// set.add(Scalar::from(2.5));
/// set.add(Scalar::from(7));
/// set.add(Scalar::from("Apple"));
///
/// assert!(!set.add(Scalar::from(7.0)));
/// assert_eq!(set.to_string(), "{2.5, 7, Apple, pear}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A text value.
    Text(String),
}

impl Scalar {
    /// Returns `true` for [`Scalar::Integer`] and [`Scalar::Float`].
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns the text value, if this is [`Scalar::Text`].
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the numeric value as `f64`, if this is a number.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(integer) => Some(*integer as f64),
            Self::Float(float) => Some(*float),
            Self::Text(_) => None,
        }
    }

    fn compare_numbers(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => Some(left.cmp(right)),
            (Self::Float(left), Self::Float(right)) => Some(compare_floats(*left, *right)),
            (Self::Integer(left), Self::Float(right)) => {
                Some(compare_integer_to_float(*left, *right))
            }
            (Self::Float(left), Self::Integer(right)) => {
                Some(compare_integer_to_float(*right, *left).reverse())
            }
            _ => None,
        }
    }

    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Integer(_) | Self::Float(_) => 0,
            Self::Text(_) => 1,
        }
    }
}

/// 2^63, the first value above `i64::MAX`. Exactly representable as `f64`.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Numeric order with `-0.0 == 0.0`. `NaN` is placed by its sign: positive
/// `NaN` above every number, negative `NaN` below.
fn compare_floats(left: f64, right: f64) -> Ordering {
    left.partial_cmp(&right).unwrap_or_else(|| left.total_cmp(&right))
}

/// Compares by exact value, without rounding `integer` to `f64`.
#[allow(clippy::cast_possible_truncation)]
fn compare_integer_to_float(integer: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= I64_UPPER_BOUND {
        return Ordering::Less;
    }
    if float < -I64_UPPER_BOUND {
        return Ordering::Greater;
    }

    // In range, so the integral part converts to i64 without loss.
    let whole = float.trunc();
    integer.cmp(&(whole as i64)).then_with(|| {
        let fraction = float - whole;
        if fraction > 0.0 {
            Ordering::Less
        } else if fraction < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

impl Comparable for Scalar {
    fn compare_to(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left.compare_to(right),
            _ => self
                .compare_numbers(other)
                .unwrap_or_else(|| self.kind_rank().cmp(&other.kind_rank())),
        }
    }

    fn compare_to_ignore_case(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left.compare_to_ignore_case(right),
            _ => self.compare_to(other),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(integer) => write!(formatter, "{integer}"),
            Self::Float(float) => write!(formatter, "{float}"),
            Self::Text(text) => write!(formatter, "{text}"),
        }
    }
}

macro_rules! impl_from_integer {
    ($($type:ty),*) => {
        $(
            impl From<$type> for Scalar {
                #[inline]
                fn from(value: $type) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Scalar {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Integer(integer) => serializer.serialize_i64(*integer),
            Self::Float(float) => serializer.serialize_f64(*float),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[cfg(feature = "serde")]
struct ScalarVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer, float, or string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Scalar::Integer(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value).map(Scalar::Integer).map_err(|_| {
            E::invalid_value(serde::de::Unexpected::Unsigned(value), &"an integer within i64 range")
        })
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Scalar::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Scalar::from(value))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Scalar::Text(value))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::OrderingMode;
    use rstest::rstest;

    #[rstest]
    #[case::integers(Scalar::Integer(3), Scalar::Integer(5), Ordering::Less)]
    #[case::floats(Scalar::Float(2.5), Scalar::Float(-1.0), Ordering::Greater)]
    #[case::integer_against_float(Scalar::Integer(2), Scalar::Float(2.5), Ordering::Less)]
    #[case::float_equal_to_integer(Scalar::Float(4.0), Scalar::Integer(4), Ordering::Equal)]
    #[case::number_before_text(Scalar::Integer(999), Scalar::from("0"), Ordering::Less)]
    #[case::text_after_number(Scalar::from("a"), Scalar::Float(1e300), Ordering::Greater)]
    fn compare_is_mode_independent_for_numbers_and_kinds(
        #[case] left: Scalar,
        #[case] right: Scalar,
        #[case] expected: Ordering,
    ) {
        for mode in [OrderingMode::CaseSensitive, OrderingMode::CaseInsensitive] {
            assert_eq!(mode.compare(&left, &right), expected);
            assert_eq!(mode.compare(&right, &left), expected.reverse());
        }
    }

    #[rstest]
    #[case::fraction_above(0, 0.5, Ordering::Less)]
    #[case::fraction_below(0, -0.5, Ordering::Greater)]
    #[case::negative_fraction(-1, -1.5, Ordering::Greater)]
    #[case::negative_zero(0, -0.0, Ordering::Equal)]
    #[case::above_f64_precision(9_007_199_254_740_993, 9_007_199_254_740_992.0, Ordering::Greater)]
    #[case::max_below_upper_bound(i64::MAX, 9_223_372_036_854_775_808.0, Ordering::Less)]
    #[case::min_equals_lower_bound(i64::MIN, -9_223_372_036_854_775_808.0, Ordering::Equal)]
    #[case::below_infinity(i64::MAX, f64::INFINITY, Ordering::Less)]
    #[case::above_negative_infinity(i64::MIN, f64::NEG_INFINITY, Ordering::Greater)]
    #[case::below_nan(i64::MAX, f64::NAN, Ordering::Less)]
    #[case::above_negative_nan(i64::MIN, -f64::NAN, Ordering::Greater)]
    fn integer_against_float_is_exact(
        #[case] integer: i64,
        #[case] float: f64,
        #[case] expected: Ordering,
    ) {
        let integer = Scalar::Integer(integer);
        let float = Scalar::Float(float);
        assert_eq!(integer.compare_to(&float), expected);
        assert_eq!(float.compare_to(&integer), expected.reverse());
    }

    #[rstest]
    fn zero_signs_are_one_member() {
        assert_eq!(Scalar::Float(-0.0).compare_to(&Scalar::Float(0.0)), Ordering::Equal);
        assert_eq!(Scalar::Float(-0.0).compare_to(&Scalar::Integer(0)), Ordering::Equal);
    }

    #[rstest]
    fn large_integers_stay_distinct_from_nearby_float() {
        let below = Scalar::Integer(9_007_199_254_740_992);
        let above = Scalar::Integer(9_007_199_254_740_993);
        let float = Scalar::Float(9_007_199_254_740_992.0);

        assert_eq!(below.compare_to(&float), Ordering::Equal);
        assert_eq!(above.compare_to(&float), Ordering::Greater);
        assert_eq!(below.compare_to(&above), Ordering::Less);
    }

    #[rstest]
    fn text_comparison_follows_mode() {
        let lower = Scalar::from("apple");
        let upper = Scalar::from("APPLE");
        assert_eq!(
            OrderingMode::CaseSensitive.compare(&lower, &upper),
            Ordering::Greater
        );
        assert_eq!(
            OrderingMode::CaseInsensitive.compare(&lower, &upper),
            Ordering::Equal
        );
    }

    #[rstest]
    fn accessors() {
        assert!(Scalar::from(1).is_numeric());
        assert!(Scalar::from(1.5).is_numeric());
        assert!(!Scalar::from("x").is_numeric());
        assert_eq!(Scalar::from("x").as_text(), Some("x"));
        assert_eq!(Scalar::from(3).as_f64(), Some(3.0));
        assert_eq!(Scalar::from("x").as_f64(), None);
    }

    #[rstest]
    #[case(Scalar::Integer(-7), "-7")]
    #[case(Scalar::Float(0.5), "0.5")]
    #[case(Scalar::from("Fig"), "Fig")]
    fn display(#[case] scalar: Scalar, #[case] expected: &str) {
        assert_eq!(scalar.to_string(), expected);
    }
}
