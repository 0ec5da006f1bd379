//! Scalar coercers.
//!
//! Each coercer turns one raw string into one typed value and applies the
//! rule's `min`/`max` bounds. Parse and range failures are reported as
//! distinct kinds but the driver treats them identically.

use crate::error::ExtractErrorKind;
use crate::rule::Bounds;

/// Accepts any string whose byte length lies within `min`/`max`.
pub fn coerce_string(raw: &str, bounds: &Bounds) -> Result<String, ExtractErrorKind> {
    let len = i64::try_from(raw.len()).unwrap_or(i64::MAX);
    if !bounds.contains(len) {
        return Err(ExtractErrorKind::RangeViolation);
    }
    Ok(raw.to_string())
}

/// Parses a base-10 signed 64-bit integer and checks it against `min`/`max`.
pub fn coerce_int(raw: &str, bounds: &Bounds) -> Result<i64, ExtractErrorKind> {
    let value: i64 = raw.parse().map_err(|_| ExtractErrorKind::ParseFailure)?;
    if !bounds.contains(value) {
        return Err(ExtractErrorKind::RangeViolation);
    }
    Ok(value)
}

/// Parses a 64-bit float and checks its ceiling against `min`/`max`.
///
/// The bounds are integer thresholds: `9.9` satisfies `max: 10` because
/// `ceil(9.9) == 10`, while `10.1` does not. Values beyond the `i64` range
/// saturate before the comparison. NaN fails whenever a bound is set.
///
/// Literal overflow such as `1e400` is a parse failure; only the spelled-out
/// `inf`/`infinity` forms produce an infinite value. Hexadecimal floats are
/// not accepted.
pub fn coerce_float(raw: &str, bounds: &Bounds) -> Result<f64, ExtractErrorKind> {
    let value: f64 = raw.parse().map_err(|_| ExtractErrorKind::ParseFailure)?;
    if value.is_infinite() && !is_infinity_literal(raw) {
        return Err(ExtractErrorKind::ParseFailure);
    }
    if bounds.is_unbounded() {
        return Ok(value);
    }
    if value.is_nan() || !bounds.contains(value.ceil() as i64) {
        return Err(ExtractErrorKind::RangeViolation);
    }
    Ok(value)
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Parses a boolean. Bounds do not apply.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`.
pub fn coerce_bool(raw: &str, _bounds: &Bounds) -> Result<bool, ExtractErrorKind> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ExtractErrorKind::ParseFailure),
    }
}
