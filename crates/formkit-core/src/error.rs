//! Error types for the formkit engine.
//!
//! Every condition here is recoverable: the engine never terminates the
//! process, and callers may surface the error and retry the same operation.
//! Validation outcomes are deliberately *not* errors — see
//! [`ValidationReport`], which submit returns as data.

use std::fmt;

use thiserror::Error;

use crate::address::{FieldId, SectionId};
use crate::value::ValueKind;

/// The primary error type for the formkit engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// An update or visibility call referenced an unknown field, or an
    /// options update targeted a field whose type takes no options.
    #[error("invalid field: {0}")]
    InvalidField(FieldId),

    /// A nested-add referenced an unknown section.
    #[error("unknown section: {0}")]
    UnknownSection(SectionId),

    /// A value edit carried a kind that conflicts with the field's declared
    /// kind. Each slot holds values of a single kind for its whole life.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// The kind the field declares.
        expected: ValueKind,
        /// The kind the caller supplied.
        got: ValueKind,
    },

    /// Engine settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A convenience alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;

/// A single validation failure reported at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// The slot the failure refers to: a positional address string for
    /// field rules, or the verbatim name for form-level schema slots.
    pub slot: String,
    /// The human-readable failure message.
    pub message: String,
}

impl ValidationFailure {
    /// Creates a failure for a slot.
    pub fn new(slot: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.slot, self.message)
    }
}

/// The ordered sequence of failures produced by a validation pass.
///
/// An empty report means submission proceeds. Failures keep the order in
/// which they were found (schema slots first, then fields in address order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// Creates an empty report.
    pub const fn new() -> Self {
        Self { failures: Vec::new() }
    }

    /// Appends a failure.
    pub fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Returns `true` if no failures were recorded.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns the failures in report order.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Returns the failures recorded against one slot.
    pub fn for_slot(&self, slot: &str) -> Vec<&ValidationFailure> {
        self.failures.iter().filter(|f| f.slot == slot).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for failure in &self.failures {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{failure}")?;
            first = false;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl FromIterator<ValidationFailure> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::IdAllocator;

    #[test]
    fn test_error_display() {
        let mut ids = IdAllocator::new();
        let field = ids.next_field();
        let section = ids.next_section();
        assert_eq!(
            FormError::InvalidField(field).to_string(),
            "invalid field: 0"
        );
        assert_eq!(
            FormError::UnknownSection(section).to_string(),
            "unknown section: 1"
        );
        assert_eq!(
            FormError::TypeMismatch {
                expected: ValueKind::Text,
                got: ValueKind::Bool,
            }
            .to_string(),
            "type mismatch: expected text, got bool"
        );
    }

    #[test]
    fn test_report_accumulates_in_order() {
        let mut report = ValidationReport::new();
        assert!(report.is_empty());

        report.push(ValidationFailure::new("requiredField", "This field is required"));
        report.push(ValidationFailure::new("field-0", "Enter a valid value"));

        assert_eq!(report.len(), 2);
        assert_eq!(report.failures()[0].slot, "requiredField");
        assert_eq!(report.failures()[1].slot, "field-0");
    }

    #[test]
    fn test_report_for_slot() {
        let report: ValidationReport = vec![
            ValidationFailure::new("field-0", "This field is required"),
            ValidationFailure::new("field-1", "Enter a valid value"),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.for_slot("field-0").len(), 1);
        assert!(report.for_slot("field-9").is_empty());
    }

    #[test]
    fn test_report_display() {
        let report: ValidationReport =
            vec![ValidationFailure::new("requiredField", "This field is required")]
                .into_iter()
                .collect();
        assert_eq!(report.to_string(), "requiredField: This field is required");
    }
}
