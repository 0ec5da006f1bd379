use std::fmt;

/// Error returned when an extraction is rejected.
///
/// Extraction is all-or-nothing: the first field that fails any check aborts
/// the whole pass and is reported here. Callers that only need the baseline
/// pass/fail answer can use `Result::is_ok` or [`RuleSet::is_valid`].
///
/// The error names the offending field but never carries the rejected raw
/// value, so it can be logged or returned to a client as-is.
///
/// [`RuleSet::is_valid`]: crate::RuleSet::is_valid
///
/// # Examples
///
/// ```
/// use form_extract::{ExtractError, ExtractErrorKind};
///
/// let error = ExtractError::new(ExtractErrorKind::MissingRequired, "email");
/// assert_eq!(error.kind(), ExtractErrorKind::MissingRequired);
/// assert_eq!(error.field(), "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractError {
    kind: ExtractErrorKind,
    field: String,
}

impl ExtractError {
    /// Creates a new extraction error for the given field.
    pub fn new(kind: ExtractErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ExtractErrorKind {
        self.kind
    }

    /// Returns the name of the field that caused the rejection.
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "extraction rejected at field '{}': {}", self.field, self.kind)
    }
}

impl std::error::Error for ExtractError {}

/// Kind of extraction failure.
///
/// All kinds collapse to the same outcome (no output); the classification
/// exists for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractErrorKind {
    /// A required field was absent or had no values.
    MissingRequired,
    /// More than one raw value was supplied for a single-valued field.
    ArityMismatch,
    /// A raw value could not be parsed as the declared type.
    ParseFailure,
    /// A value (or string length) fell outside `min`/`max`.
    RangeViolation,
    /// A collection had fewer than `min_amt` or more than `max_amt` elements.
    AmountViolation,
    /// The rule declared a type this engine does not know.
    UnknownType,
}

impl fmt::Display for ExtractErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "missing required value"),
            Self::ArityMismatch => write!(f, "too many values"),
            Self::ParseFailure => write!(f, "malformed value"),
            Self::RangeViolation => write!(f, "value out of range"),
            Self::AmountViolation => write!(f, "wrong number of values"),
            Self::UnknownType => write!(f, "unknown rule type"),
        }
    }
}

/// Error returned when a schema cannot be built from its serialized form.
///
/// Only representability problems are detected here. Rules that are
/// well-formed but contradictory (for example `min` greater than `max`) are
/// accepted and simply never satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    kind: SchemaErrorKind,
    field: Option<String>,
    message: String,
}

impl SchemaError {
    /// Creates a schema error that is not tied to a particular field.
    pub fn new(kind: SchemaErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
        }
    }

    /// Creates a schema error for the given field.
    pub fn for_field(
        kind: SchemaErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> SchemaErrorKind {
        self.kind
    }

    /// Returns the field whose rule was rejected, if any.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "invalid schema ({}) for field '{}': {}", self.kind, field, self.message),
            None => write!(f, "invalid schema ({}): {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Kind of schema construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorKind {
    /// The schema document was not a key-value object.
    NotAnObject,
    /// A bound option was not an integer representable as `i64`.
    InvalidBound,
}

impl fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "not an object"),
            Self::InvalidBound => write!(f, "invalid bound"),
        }
    }
}
