use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value as JsonValue;

use crate::config::ExtractConfig;
use crate::error::{ExtractError, SchemaError};
use crate::extract;
use crate::schema::Schema;
use crate::value::{Extracted, RawInput};
use crate::web::ExtractFormValues;

/// A rule engine: an active schema plus extraction settings.
///
/// The schema is held behind an `Arc` that [`replace_schema`](Self::replace_schema)
/// swaps as a whole. Each extraction takes one snapshot of the schema when it
/// starts, so a concurrent replacement is never observed half-way.
///
/// # Examples
///
/// ```
/// use form_extract::{RuleSet, Value};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let rules = RuleSet::from_json(&json!({
///     "age": { "type": "int", "must": {}, "min": 18, "max": 65 },
/// }))
/// .unwrap();
///
/// let mut raw = HashMap::new();
/// raw.insert("age".to_string(), vec!["30".to_string()]);
///
/// let output = rules.extract(&raw).unwrap();
/// assert_eq!(output["age"], Value::Int(30));
///
/// raw.insert("age".to_string(), vec!["17".to_string()]);
/// assert!(rules.extract(&raw).is_err());
/// ```
#[derive(Debug)]
pub struct RuleSet {
    schema: RwLock<Arc<Schema>>,
    config: ExtractConfig,
}

impl RuleSet {
    /// Creates a rule engine with the default configuration.
    pub fn new(schema: Schema) -> Self {
        Self::with_config(schema, ExtractConfig::default())
    }

    /// Creates a rule engine with an explicit configuration.
    pub fn with_config(schema: Schema, config: ExtractConfig) -> Self {
        Self {
            schema: RwLock::new(Arc::new(schema)),
            config,
        }
    }

    /// Creates a rule engine from a JSON schema document.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if the document cannot be turned into a
    /// [`Schema`]; see [`Schema::from_json`].
    pub fn from_json(document: &JsonValue) -> Result<Self, SchemaError> {
        Schema::from_json(document).map(Self::new)
    }

    /// Returns the extraction configuration.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Returns a snapshot of the active schema.
    pub fn schema(&self) -> Arc<Schema> {
        let guard = self.schema.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replaces the entire schema.
    ///
    /// Extractions already running keep the schema they started with.
    pub fn replace_schema(&self, schema: Schema) {
        let schema = Arc::new(schema);
        let fields = schema.len();
        let mut guard = self.schema.write().unwrap_or_else(PoisonError::into_inner);
        *guard = schema;
        tracing::debug!(fields, "schema replaced");
    }

    /// Extracts and validates typed values from a multi-valued input map.
    ///
    /// Either every field in the schema validates and the full output is
    /// returned, or the first failing field is reported and nothing is.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractError`] naming the first field that failed.
    pub fn extract(&self, raw: &RawInput) -> Result<Extracted, ExtractError> {
        let schema = self.schema();
        extract::extract(&schema, &self.config, raw)
    }

    /// Returns `true` if `raw` passes every rule.
    pub fn is_valid(&self, raw: &RawInput) -> bool {
        self.extract(raw).is_ok()
    }

    /// Extracts from a form or query-parameter source.
    ///
    /// # Errors
    ///
    /// Same as [`extract`](Self::extract).
    pub fn extract_form<F>(&self, form: &F) -> Result<Extracted, ExtractError>
    where
        F: ExtractFormValues + ?Sized,
    {
        let raw = form.extract_form_values().into_multi_map();
        self.extract(&raw)
    }
}
