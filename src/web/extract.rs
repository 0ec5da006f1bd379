//! Extraction boundary trait for web integration.
//!
//! This module defines how framework-specific request types hand their
//! decoded form or query parameters to the rule engine.

use super::FormValues;

/// Collects decoded form or query-string values from a framework request.
///
/// Framework integrations implement this for their own request or query
/// types. The trait only maps framework types to [`FormValues`]; validation
/// and coercion happen in [`RuleSet::extract_form`](crate::RuleSet::extract_form).
///
/// # Examples
///
/// ```
/// use form_extract::web::{ExtractFormValues, FormValues};
///
/// // Example framework-specific query type
/// struct MyFrameworkQuery {
///     pairs: Vec<(String, String)>,
/// }
///
/// impl ExtractFormValues for MyFrameworkQuery {
///     fn extract_form_values(&self) -> FormValues {
///         self.pairs.iter().cloned().collect()
///     }
/// }
///
/// let query = MyFrameworkQuery {
///     pairs: vec![("id".to_string(), "1".to_string()), ("id".to_string(), "2".to_string())],
/// };
/// assert_eq!(query.extract_form_values().get_all("id"), ["1", "2"]);
/// ```
pub trait ExtractFormValues {
    /// Returns every submitted value, keyed by parameter name.
    fn extract_form_values(&self) -> FormValues;
}
