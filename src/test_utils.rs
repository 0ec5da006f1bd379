//! Shared helpers for unit tests.

use proptest::prelude::*;

use crate::value::RawInput;

/// Builds raw input from borrowed field/value pairs.
pub(crate) fn raw_input(fields: &[(&str, &[&str])]) -> RawInput {
    fields
        .iter()
        .map(|(name, values)| {
            (
                name.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}

/// Strategy: raw values that are valid decimal integers within `min..=max`.
pub(crate) fn arb_int_text(min: i64, max: i64) -> impl Strategy<Value = String> {
    (min..=max).prop_map(|i| i.to_string())
}

/// Strategy: printable strings up to `max_len` bytes of ASCII.
pub(crate) fn arb_ascii_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[ -~]{{0,{}}}", max_len))
        .expect("regex is valid")
}
