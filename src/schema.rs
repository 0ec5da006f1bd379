//! The rule store: field name to rule definition.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::error::{SchemaError, SchemaErrorKind};
use crate::rule::{Rule, RuleDef};

/// An ordered mapping from field name to [`RuleDef`].
///
/// Fields are visited during extraction in insertion order. Schemas loaded
/// with [`Schema::from_json`] follow the key order reported by `serde_json`.
///
/// # Examples
///
/// ```
/// use form_extract::{FieldType, Rule, RuleDef, Schema};
///
/// let schema = Schema::new()
///     .with_field("age", Rule::new(FieldType::Int).required().min(18))
///     .with_field("notes", RuleDef::Passthrough);
///
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.get("notes"), Some(&RuleDef::Passthrough));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: IndexMap<String, RuleDef>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and returns the schema, for chaining.
    pub fn with_field(mut self, name: impl Into<String>, rule: impl Into<RuleDef>) -> Self {
        self.insert(name, rule);
        self
    }

    /// Adds or replaces the rule for a field.
    ///
    /// This only applies while the schema is being assembled; once handed to
    /// a [`RuleSet`](crate::RuleSet) it can only be replaced as a whole.
    pub fn insert(&mut self, name: impl Into<String>, rule: impl Into<RuleDef>) {
        self.fields.insert(name.into(), rule.into());
    }

    /// Returns the rule for a field.
    pub fn get(&self, name: &str) -> Option<&RuleDef> {
        self.fields.get(name)
    }

    /// Iterates over the fields in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleDef)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a schema from a JSON object.
    ///
    /// Every entry whose value is an object becomes a structured rule; any
    /// other value marks the field as a passthrough.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if the document is not an object or if a
    /// bound is not an integer representable as `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_extract::{RuleDef, Schema};
    /// use serde_json::json;
    ///
    /// let schema = Schema::from_json(&json!({
    ///     "age": { "type": "int", "min": 18, "max": 65 },
    ///     "free": "anything",
    /// }))
    /// .unwrap();
    ///
    /// assert!(matches!(schema.get("age"), Some(RuleDef::Structured(_))));
    /// assert_eq!(schema.get("free"), Some(&RuleDef::Passthrough));
    /// ```
    pub fn from_json(document: &JsonValue) -> Result<Self, SchemaError> {
        let JsonValue::Object(entries) = document else {
            return Err(SchemaError::new(
                SchemaErrorKind::NotAnObject,
                "schema must map field names to rules",
            ));
        };

        let mut schema = Schema::new();
        for (name, value) in entries {
            let rule = match value {
                JsonValue::Object(options) => RuleDef::Structured(Rule::from_options(name, options)?),
                _ => RuleDef::Passthrough,
            };
            schema.insert(name.clone(), rule);
        }

        tracing::debug!(fields = schema.len(), "schema loaded");
        Ok(schema)
    }
}
