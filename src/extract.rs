//! The extraction driver.
//!
//! Walks the schema field by field. For each structured field it decides
//! presence and required-ness, checks arity, dispatches to the coercer for the
//! declared type and stores the result. The first failing field aborts the
//! whole pass; there is no partial output.
//!
//! # Failure policy
//!
//! | Rule                      | Check fails                                  |
//! |---------------------------|----------------------------------------------|
//! | required, absent or empty | abort                                        |
//! | no `type`                 | abort if required, otherwise omit the field* |
//! | singular `type`           | abort                                        |
//! | plural `type`             | abort                                        |
//! | unrecognized `type`       | abort                                        |
//!
//! \* unless [`OptionalFailure::Abort`] is configured.

use crate::coerce::{coerce_bool, coerce_float, coerce_int, coerce_string};
use crate::collection::{coerce_bools, coerce_floats, coerce_ints, coerce_strings};
use crate::config::{ExtractConfig, OptionalFailure};
use crate::error::{ExtractError, ExtractErrorKind};
use crate::logging::FieldLog;
use crate::rule::{FieldType, Rule, RuleDef};
use crate::schema::Schema;
use crate::value::{Extracted, RawInput, Value};

/// Result of processing one structured field.
enum FieldOutcome {
    /// Insert the value under the field name.
    Store(Value),
    /// Optional field with no values.
    Absent,
    /// Optional untyped field that failed its checks.
    Omitted(ExtractErrorKind),
}

/// Runs one extraction pass of `raw` against `schema`.
pub(crate) fn extract(
    schema: &Schema,
    config: &ExtractConfig,
    raw: &RawInput,
) -> Result<Extracted, ExtractError> {
    let mut output = Extracted::new();

    for (name, rule) in schema.iter() {
        let log = FieldLog::new(name);
        let values = raw.get(name);

        let rule = match rule {
            RuleDef::Passthrough => {
                match values {
                    Some(values) => {
                        log.passthrough(values.len());
                        output.insert(name.to_string(), Value::Strings(values.clone()));
                    }
                    None => log.skipped(),
                }
                continue;
            }
            RuleDef::Structured(rule) => rule,
        };

        match extract_field(rule, values.map(Vec::as_slice), config) {
            Ok(FieldOutcome::Store(value)) => {
                log.accepted(rule.field_type(), value.len());
                output.insert(name.to_string(), value);
            }
            Ok(FieldOutcome::Absent) => log.skipped(),
            Ok(FieldOutcome::Omitted(kind)) => log.omitted(kind),
            Err(kind) => {
                log.rejected(kind);
                tracing::trace!(
                    fields = schema.len(),
                    stored = output.len(),
                    outcome = "rejected",
                    "extraction complete"
                );
                return Err(ExtractError::new(kind, log.field()));
            }
        }
    }

    tracing::trace!(
        fields = schema.len(),
        stored = output.len(),
        outcome = "accepted",
        "extraction complete"
    );
    Ok(output)
}

fn extract_field(
    rule: &Rule,
    values: Option<&[String]>,
    config: &ExtractConfig,
) -> Result<FieldOutcome, ExtractErrorKind> {
    let values = match values {
        Some(values) if !values.is_empty() => values,
        _ if rule.is_required() => return Err(ExtractErrorKind::MissingRequired),
        _ => return Ok(FieldOutcome::Absent),
    };
    let bounds = rule.bounds();

    let value = match rule.field_type() {
        FieldType::Default => {
            return match coerce_string(single(values)?, bounds) {
                Ok(s) => Ok(FieldOutcome::Store(Value::String(s))),
                Err(kind)
                    if rule.is_required()
                        || config.optional_failure == OptionalFailure::Abort =>
                {
                    Err(kind)
                }
                Err(kind) => Ok(FieldOutcome::Omitted(kind)),
            };
        }
        FieldType::String => Value::String(coerce_string(single(values)?, bounds)?),
        FieldType::Int => Value::Int(coerce_int(single(values)?, bounds)?),
        FieldType::Float => Value::Float(coerce_float(single(values)?, bounds)?),
        FieldType::Bool => Value::Bool(coerce_bool(single(values)?, bounds)?),
        FieldType::Strings => Value::Strings(coerce_strings(values, bounds)?),
        FieldType::Ints => Value::Ints(coerce_ints(values, bounds)?),
        FieldType::Floats => Value::Floats(coerce_floats(values, bounds)?),
        FieldType::Bools => Value::Bools(coerce_bools(values, bounds)?),
        FieldType::Unknown(_) => return Err(ExtractErrorKind::UnknownType),
    };

    Ok(FieldOutcome::Store(value))
}

/// Returns the only value of a single-valued field.
fn single(values: &[String]) -> Result<&str, ExtractErrorKind> {
    match values {
        [only] => Ok(only.as_str()),
        _ => Err(ExtractErrorKind::ArityMismatch),
    }
}
