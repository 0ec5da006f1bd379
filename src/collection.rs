//! Collection coercers for the plural rule types.

use crate::coerce::{coerce_bool, coerce_float, coerce_int, coerce_string};
use crate::error::ExtractErrorKind;
use crate::rule::Bounds;

/// Applies `coerce` to every raw value after checking the element count.
///
/// The count is checked against `min_amt`/`max_amt` before any element is
/// looked at. The first element that fails aborts the whole collection; a
/// partial collection is never returned.
fn coerce_all<T>(
    raw: &[String],
    bounds: &Bounds,
    coerce: fn(&str, &Bounds) -> Result<T, ExtractErrorKind>,
) -> Result<Vec<T>, ExtractErrorKind> {
    if !bounds.allows_amount(raw.len()) {
        return Err(ExtractErrorKind::AmountViolation);
    }
    raw.iter().map(|value| coerce(value, bounds)).collect()
}

/// Coerces every value with [`coerce_string`].
pub fn coerce_strings(raw: &[String], bounds: &Bounds) -> Result<Vec<String>, ExtractErrorKind> {
    coerce_all(raw, bounds, coerce_string)
}

/// Coerces every value with [`coerce_int`].
pub fn coerce_ints(raw: &[String], bounds: &Bounds) -> Result<Vec<i64>, ExtractErrorKind> {
    coerce_all(raw, bounds, coerce_int)
}

/// Coerces every value with [`coerce_float`].
pub fn coerce_floats(raw: &[String], bounds: &Bounds) -> Result<Vec<f64>, ExtractErrorKind> {
    coerce_all(raw, bounds, coerce_float)
}

/// Coerces every value with [`coerce_bool`].
pub fn coerce_bools(raw: &[String], bounds: &Bounds) -> Result<Vec<bool>, ExtractErrorKind> {
    coerce_all(raw, bounds, coerce_bool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn amount(min_amt: Option<i64>, max_amt: Option<i64>) -> Bounds {
        Bounds {
            min_amt,
            max_amt,
            ..Bounds::default()
        }
    }

    #[test]
    fn strings_preserve_order() {
        assert_eq!(
            coerce_strings(&raw(&["c", "a", "b"]), &Bounds::default()),
            Ok(raw(&["c", "a", "b"]))
        );
    }

    #[test]
    fn amount_is_checked_before_elements() {
        let bounds = amount(Some(1), Some(3));

        assert_eq!(
            coerce_strings(&raw(&["a", "b", "c", "d"]), &bounds),
            Err(ExtractErrorKind::AmountViolation)
        );
        // Elements would fail to parse, but the count is rejected first.
        assert_eq!(
            coerce_ints(&raw(&["x", "y", "z", "w"]), &bounds),
            Err(ExtractErrorKind::AmountViolation)
        );
        assert_eq!(
            coerce_strings(&raw(&["a", "b"]), &bounds),
            Ok(raw(&["a", "b"]))
        );
    }

    #[test]
    fn empty_collection_respects_min_amt() {
        assert_eq!(coerce_bools(&[], &Bounds::default()), Ok(vec![]));
        assert_eq!(
            coerce_bools(&[], &amount(Some(1), None)),
            Err(ExtractErrorKind::AmountViolation)
        );
    }

    #[test]
    fn first_bad_element_aborts() {
        assert_eq!(
            coerce_ints(&raw(&["1", "two", "3"]), &Bounds::default()),
            Err(ExtractErrorKind::ParseFailure)
        );
    }

    #[test]
    fn elements_use_scalar_bounds() {
        let bounds = Bounds {
            min: Some(0),
            max: Some(10),
            max_amt: Some(5),
            ..Bounds::default()
        };

        assert_eq!(coerce_ints(&raw(&["0", "10"]), &bounds), Ok(vec![0, 10]));
        assert_eq!(
            coerce_ints(&raw(&["0", "11"]), &bounds),
            Err(ExtractErrorKind::RangeViolation)
        );
        assert_eq!(
            coerce_floats(&raw(&["9.9", "10.5"]), &bounds),
            Err(ExtractErrorKind::RangeViolation)
        );
        assert_eq!(
            coerce_strings(&raw(&["short", "far too long"]), &bounds),
            Err(ExtractErrorKind::RangeViolation)
        );
    }

    #[test]
    fn floats_and_bools_coerce() {
        assert_eq!(
            coerce_floats(&raw(&["1.5", "-2"]), &Bounds::default()),
            Ok(vec![1.5, -2.0])
        );
        assert_eq!(
            coerce_bools(&raw(&["t", "0", "True"]), &Bounds::default()),
            Ok(vec![true, false, true])
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: integer collections round-trip their decimal text in order
            #[test]
            fn proptest_ints_preserve_values(values in prop::collection::vec(any::<i64>(), 0..16)) {
                let raw: Vec<String> = values.iter().map(i64::to_string).collect();

                prop_assert_eq!(coerce_ints(&raw, &Bounds::default()), Ok(values));
            }

            /// Property: the amount check alone decides acceptance for unconstrained strings
            #[test]
            fn proptest_amount_bounds_decide_strings(
                len in 0usize..10,
                min_amt in 0i64..6,
                max_amt in 0i64..6,
            ) {
                let raw = vec!["v".to_string(); len];
                let bounds = amount(Some(min_amt), Some(max_amt));
                let expected = (len as i64) >= min_amt && (len as i64) <= max_amt;

                prop_assert_eq!(coerce_strings(&raw, &bounds).is_ok(), expected);
            }
        }
    }
}
