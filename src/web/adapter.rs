//! Multi-valued form adapter.

use indexmap::IndexMap;

use crate::value::RawInput;

use super::ExtractFormValues;

/// Decoded form or query-string values, keyed by parameter name.
///
/// `FormValues` is the hand-off point between a web framework and the rule
/// engine. Framework code appends every decoded `name=value` pair in the order
/// it appeared; repeated names accumulate. Values are kept exactly as given:
/// no trimming and no percent-decoding happens here.
///
/// # Examples
///
/// ```
/// use form_extract::web::FormValues;
///
/// let mut form = FormValues::new();
/// form.append("tag", "a");
/// form.append("tag", "b");
/// form.append("name", "Alice");
///
/// assert_eq!(form.get("name"), Some("Alice"));
/// assert_eq!(form.get_all("tag"), ["a", "b"]);
/// assert_eq!(form.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: IndexMap<String, Vec<String>>,
}

impl FormValues {
    /// Creates an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `name`, keeping earlier values.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Replaces every value for `name` with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), vec![value.into()]);
    }

    /// Removes `name` and returns its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.values.shift_remove(name)
    }

    /// Returns the first value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value for `name`, in submission order.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` if `name` was submitted.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over names and their values in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Converts into the multi-map consumed by [`RuleSet::extract`](crate::RuleSet::extract).
    pub fn into_multi_map(self) -> RawInput {
        self.values.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormValues::new();
        for (name, value) in iter {
            form.append(name, value);
        }
        form
    }
}

impl From<RawInput> for FormValues {
    fn from(raw: RawInput) -> Self {
        Self {
            values: raw.into_iter().collect(),
        }
    }
}

impl ExtractFormValues for FormValues {
    fn extract_form_values(&self) -> FormValues {
        self.clone()
    }
}

impl ExtractFormValues for RawInput {
    fn extract_form_values(&self) -> FormValues {
        FormValues::from(self.clone())
    }
}
