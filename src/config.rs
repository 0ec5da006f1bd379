//! Extraction configuration.

use serde::{Deserialize, Serialize};

/// What happens when an optional, untyped field fails its string checks.
///
/// Every other failing field aborts the extraction. Untyped optional fields
/// are the one exception: by default they are dropped from the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalFailure {
    /// Leave the field out of the output and continue.
    #[default]
    Omit,
    /// Reject the whole extraction.
    Abort,
}

/// Configuration for a [`RuleSet`](crate::RuleSet).
///
/// Can be embedded in an application's own configuration file; missing keys
/// fall back to [`ExtractConfig::default`].
///
/// # Examples
///
/// ```
/// use form_extract::{ExtractConfig, OptionalFailure};
///
/// let config: ExtractConfig = serde_json::from_str(r#"{ "optional_failure": "abort" }"#).unwrap();
/// assert_eq!(config, ExtractConfig::strict());
///
/// let config: ExtractConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.optional_failure, OptionalFailure::Omit);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Policy for optional untyped fields that fail their checks.
    pub optional_failure: OptionalFailure,
}

impl ExtractConfig {
    /// Every declared field that fails a check aborts the extraction.
    pub fn strict() -> Self {
        Self {
            optional_failure: OptionalFailure::Abort,
        }
    }
}
