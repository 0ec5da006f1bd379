//! Declarative extraction and validation of form input.
//!
//! This crate turns raw, string-valued input (as produced by form submission
//! or query-string parsing) into typed values according to a schema of field
//! rules. Extraction is strict and all-or-nothing:
//! - **Typed coercion**: strings, integers, floats and booleans, singly or as lists
//! - **Presence rules**: required fields must be present and non-empty
//! - **Range checks**: numeric bounds, string length and list size limits
//! - **Atomic result**: any failing field rejects the whole input
//!
//! # Core Types
//!
//! - [`Schema`]: Field name to [`RuleDef`] mapping, built in code or from JSON
//! - [`Rule`]: Declared [`FieldType`], required flag and [`Bounds`]
//! - [`RuleSet`]: The engine holding the active schema
//! - [`Value`]: A coerced output value
//! - [`ExtractError`]: Names the field that rejected the input
//! - [`web::FormValues`]: Multi-valued form input handed over by a web framework
//!
//! # Examples
//!
//! ```
//! use form_extract::{RuleSet, Value};
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let rules = RuleSet::from_json(&json!({
//!     "name": { "must": {} },
//!     "age": { "type": "int", "min": 18, "max": 65 },
//!     "tags": { "type": "strings", "min_amt": 1, "max_amt": 3 },
//! }))
//! .expect("schema is valid");
//!
//! let raw: HashMap<String, Vec<String>> = [
//!     ("name", vec!["Alice"]),
//!     ("age", vec!["30"]),
//!     ("tags", vec!["a", "b"]),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
//! .collect();
//!
//! let output = rules.extract(&raw).expect("input is valid");
//! assert_eq!(output["name"], Value::String("Alice".to_string()));
//! assert_eq!(output["age"], Value::Int(30));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod coerce;
mod collection;
mod config;
mod error;
mod extract;
mod logging;
mod rule;
mod ruleset;
mod schema;
mod value;
pub mod web;

#[cfg(test)]
mod test_utils;

pub use coerce::{coerce_bool, coerce_float, coerce_int, coerce_string};
pub use collection::{coerce_bools, coerce_floats, coerce_ints, coerce_strings};
pub use config::{ExtractConfig, OptionalFailure};
pub use error::{ExtractError, ExtractErrorKind, SchemaError, SchemaErrorKind};
pub use rule::{Bounds, FieldType, Rule, RuleDef};
pub use ruleset::RuleSet;
pub use schema::Schema;
pub use value::{Extracted, RawInput, Value};
