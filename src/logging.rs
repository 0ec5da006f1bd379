use crate::error::ExtractErrorKind;
use crate::rule::FieldType;

/// A per-field logger used by the extraction driver.
///
/// Every event carries the field name as a structured `field` key. Raw input
/// values are never logged; only their count and the outcome are.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldLog<'a> {
    field: &'a str,
}

impl<'a> FieldLog<'a> {
    /// Creates a logger for one schema field.
    pub(crate) fn new(field: &'a str) -> Self {
        Self { field }
    }

    /// Returns the field name associated with this logger.
    pub(crate) fn field(&self) -> &str {
        self.field
    }

    /// Raw values were copied through unchecked.
    pub(crate) fn passthrough(&self, count: usize) {
        tracing::debug!(field = %self.field, count, "field passed through unchecked");
    }

    /// An optional field had no values and was left out.
    pub(crate) fn skipped(&self) {
        tracing::trace!(field = %self.field, "optional field absent");
    }

    /// The field was coerced and stored.
    pub(crate) fn accepted(&self, field_type: &FieldType, count: usize) {
        tracing::debug!(field = %self.field, field_type = %field_type, count, "field accepted");
    }

    /// An optional untyped field failed its checks and was dropped.
    pub(crate) fn omitted(&self, kind: ExtractErrorKind) {
        tracing::debug!(field = %self.field, reason = %kind, "optional field omitted");
    }

    /// The field aborted the extraction.
    pub(crate) fn rejected(&self, kind: ExtractErrorKind) {
        tracing::debug!(field = %self.field, reason = %kind, "extraction rejected");
    }
}
