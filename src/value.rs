use std::collections::HashMap;

use serde::Serialize;

/// Raw input: field name to the ordered values submitted for it.
pub type RawInput = HashMap<String, Vec<String>>;

/// Output of a successful extraction: field name to coerced value.
pub type Extracted = HashMap<String, Value>;

/// A coerced field value.
///
/// The variant follows the rule's declared type. Passthrough fields always
/// produce [`Value::Strings`].
///
/// Serializes to the natural JSON shape (`"a"`, `18`, `[true, false]`, ...).
///
/// # Examples
///
/// ```
/// use form_extract::Value;
///
/// let tags = Value::Strings(vec!["a".to_string(), "b".to_string()]);
/// assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["a","b"]"#);
/// assert_eq!(Value::Int(18).as_int(), Some(18));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A single string.
    String(String),
    /// A single signed 64-bit integer.
    Int(i64),
    /// A single 64-bit float.
    Float(f64),
    /// A single boolean.
    Bool(bool),
    /// An ordered list of strings.
    Strings(Vec<String>),
    /// An ordered list of integers.
    Ints(Vec<i64>),
    /// An ordered list of floats.
    Floats(Vec<f64>),
    /// An ordered list of booleans.
    Bools(Vec<bool>),
}

impl Value {
    /// Returns the string if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Value::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` for the list variants.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Value::Strings(_) | Value::Ints(_) | Value::Floats(_) | Value::Bools(_)
        )
    }

    /// Returns the element count for lists, `1` for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Strings(v) => v.len(),
            Value::Ints(v) => v.len(),
            Value::Floats(v) => v.len(),
            Value::Bools(v) => v.len(),
            _ => 1,
        }
    }

    /// Returns `true` for an empty list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
