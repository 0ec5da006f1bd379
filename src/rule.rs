//! Rule definitions attached to schema fields.
//!
//! A field is governed either by a [`RuleDef::Passthrough`] marker, which
//! copies raw values through unchecked, or by a structured [`Rule`] naming a
//! target type, required-ness and bounds. The choice is made once when the
//! schema is built, never during extraction.

use std::fmt;

use serde_json::{Map, Value as JsonValue};

use crate::error::{SchemaError, SchemaErrorKind};

const TYPE: &str = "type";
const MUST: &str = "must";
const MIN: &str = "min";
const MAX: &str = "max";
const MIN_AMT: &str = "min_amt";
const MAX_AMT: &str = "max_amt";

/// Target type of a structured rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// No `type` option: a single string with default checks.
    Default,
    /// `string`
    String,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `bool`
    Bool,
    /// `strings`
    Strings,
    /// `ints`
    Ints,
    /// `floats`
    Floats,
    /// `bools`
    Bools,
    /// Any other declared type. Kept so the extraction can reject it.
    Unknown(String),
}

impl FieldType {
    /// Resolves a type name as written in a schema.
    ///
    /// ```
    /// use form_extract::FieldType;
    ///
    /// assert_eq!(FieldType::from_name("ints"), FieldType::Ints);
    /// assert_eq!(FieldType::from_name("weird"), FieldType::Unknown("weird".to_string()));
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "string" => Self::String,
            "int" => Self::Int,
            "float" => Self::Float,
            "bool" => Self::Bool,
            "strings" => Self::Strings,
            "ints" => Self::Ints,
            "floats" => Self::Floats,
            "bools" => Self::Bools,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns `true` for the collection types.
    pub fn is_plural(&self) -> bool {
        matches!(self, Self::Strings | Self::Ints | Self::Floats | Self::Bools)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::Strings => write!(f, "strings"),
            Self::Ints => write!(f, "ints"),
            Self::Floats => write!(f, "floats"),
            Self::Bools => write!(f, "bools"),
            Self::Unknown(name) => write!(f, "unknown({})", name),
        }
    }
}

/// Numeric limits of a structured rule.
///
/// `min`/`max` bound scalar values (and string byte length); `min_amt`/`max_amt`
/// bound the element count of collections. Absent limits are unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    /// Lower value bound, inclusive.
    pub min: Option<i64>,
    /// Upper value bound, inclusive.
    pub max: Option<i64>,
    /// Lower element-count bound, inclusive.
    pub min_amt: Option<i64>,
    /// Upper element-count bound, inclusive.
    pub max_amt: Option<i64>,
}

impl Bounds {
    /// Returns `true` if `value` lies within `min`/`max`.
    pub fn contains(&self, value: i64) -> bool {
        within(value, self.min, self.max)
    }

    /// Returns `true` if a collection of `count` elements satisfies
    /// `min_amt`/`max_amt`.
    pub fn allows_amount(&self, count: usize) -> bool {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        within(count, self.min_amt, self.max_amt)
    }

    /// Returns `true` if neither `min` nor `max` is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

fn within(value: i64, min: Option<i64>, max: Option<i64>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

/// A structured rule: declared type, required flag and bounds.
///
/// # Examples
///
/// ```
/// use form_extract::{FieldType, Rule};
///
/// let age = Rule::new(FieldType::Int).required().min(18).max(65);
/// assert!(age.is_required());
/// assert_eq!(age.bounds().min, Some(18));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    field_type: FieldType,
    required: bool,
    bounds: Bounds,
}

impl Rule {
    /// Creates an optional, unbounded rule of the given type.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            bounds: Bounds::default(),
        }
    }

    /// Creates a rule with no declared type (a single default string).
    pub fn untyped() -> Self {
        Self::new(FieldType::Default)
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the inclusive lower value bound.
    pub fn min(mut self, min: i64) -> Self {
        self.bounds.min = Some(min);
        self
    }

    /// Sets the inclusive upper value bound.
    pub fn max(mut self, max: i64) -> Self {
        self.bounds.max = Some(max);
        self
    }

    /// Sets the inclusive lower element-count bound.
    pub fn min_amt(mut self, min_amt: i64) -> Self {
        self.bounds.min_amt = Some(min_amt);
        self
    }

    /// Sets the inclusive upper element-count bound.
    pub fn max_amt(mut self, max_amt: i64) -> Self {
        self.bounds.max_amt = Some(max_amt);
        self
    }

    /// Returns the declared type.
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Returns `true` if the field must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the rule's bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Builds a rule from the options object of one schema field.
    ///
    /// The `must` key only needs to be present; its value is ignored. A
    /// non-string `type` is kept as [`FieldType::Unknown`] and rejected at
    /// extraction time. Bounds must be integers representable as `i64`.
    pub(crate) fn from_options(
        field: &str,
        options: &Map<String, JsonValue>,
    ) -> Result<Self, SchemaError> {
        let field_type = match options.get(TYPE) {
            None => FieldType::Default,
            Some(JsonValue::String(name)) => FieldType::from_name(name),
            Some(other) => FieldType::Unknown(other.to_string()),
        };

        Ok(Self {
            field_type,
            required: options.contains_key(MUST),
            bounds: Bounds {
                min: bound(field, options, MIN)?,
                max: bound(field, options, MAX)?,
                min_amt: bound(field, options, MIN_AMT)?,
                max_amt: bound(field, options, MAX_AMT)?,
            },
        })
    }
}

/// Reads one bound option, accepting integral floats such as `18.0`.
fn bound(
    field: &str,
    options: &Map<String, JsonValue>,
    key: &str,
) -> Result<Option<i64>, SchemaError> {
    let Some(raw) = options.get(key) else {
        return Ok(None);
    };

    let invalid = |reason: &str| {
        SchemaError::for_field(
            SchemaErrorKind::InvalidBound,
            field,
            format!("'{}' {}", key, reason),
        )
    };

    let JsonValue::Number(number) = raw else {
        return Err(invalid("must be a number"));
    };

    if let Some(value) = number.as_i64() {
        return Ok(Some(value));
    }
    if number.is_u64() {
        return Err(invalid("exceeds the 64-bit signed range"));
    }

    match number.as_f64() {
        Some(value) if value.fract() != 0.0 => Err(invalid("must be a whole number")),
        // 2^63 is exactly representable and is the first value out of range.
        Some(value) if value >= -(i64::MIN as f64) || value < i64::MIN as f64 => {
            Err(invalid("exceeds the 64-bit signed range"))
        }
        Some(value) => Ok(Some(value as i64)),
        None => Err(invalid("must be a number")),
    }
}

/// How one schema field is treated during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleDef {
    /// Copy the raw values through with no conversion or check.
    Passthrough,
    /// Coerce and check according to the rule.
    Structured(Rule),
}

impl From<Rule> for RuleDef {
    fn from(rule: Rule) -> Self {
        RuleDef::Structured(rule)
    }
}
