//! Submit-time validation.
//!
//! Validation runs in two layers and accumulates failures instead of
//! short-circuiting, so every problem is reported at once:
//!
//! 1. the form-level schema — named rules derived once at engine
//!    construction, evaluated against named slots (the default schema
//!    requires a non-empty `requiredField`);
//! 2. per-field declared rules, evaluated against the store value of every
//!    visible field in address order.
//!
//! The result is a [`ValidationReport`] — ordinary data, never an `Err`.
//! An empty report means submission proceeds.

use regex::Regex;

use formkit_core::{Slot, ValidationFailure, ValidationReport, Value};
use formkit_model::FormModel;

use crate::values::ValueStore;

/// The message reported for a missing required value.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// The message reported for a pattern mismatch.
pub const INVALID_MESSAGE: &str = "Enter a valid value";

/// The named slot the default schema validates.
pub const REQUIRED_FIELD_SLOT: &str = "requiredField";

/// A single validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The slot must hold a non-empty value.
    Required,
    /// The slot's textual value must match a regex. Empty values pass;
    /// combine with [`Rule::Required`] to also forbid emptiness.
    Pattern(String),
}

impl Rule {
    /// Checks a rule against a slot value (`None` = never written).
    /// Returns the failure message, or `None` on success.
    fn check(&self, value: Option<&Value>) -> Option<String> {
        match self {
            Self::Required => {
                let missing = value.map_or(true, Value::is_empty);
                missing.then(|| REQUIRED_MESSAGE.to_string())
            }
            Self::Pattern(pattern) => {
                let text = match value {
                    Some(Value::Text(s) | Value::Phone(s)) if !s.is_empty() => s,
                    _ => return None,
                };
                match Regex::new(pattern) {
                    Ok(re) => (!re.is_match(text)).then(|| INVALID_MESSAGE.to_string()),
                    Err(e) => Some(format!("Invalid pattern: {e}")),
                }
            }
        }
    }
}

/// A named form-level rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRule {
    /// The named slot this rule validates.
    pub slot: String,
    /// The rule applied to that slot.
    pub rule: Rule,
}

impl SchemaRule {
    /// Creates a schema rule for a named slot.
    pub fn new(slot: impl Into<String>, rule: Rule) -> Self {
        Self {
            slot: slot.into(),
            rule,
        }
    }
}

/// Evaluates the form-level schema and all declared field rules.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    schema: Vec<SchemaRule>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Creates an engine with the default schema: `requiredField` must be
    /// a non-empty string.
    pub fn new() -> Self {
        Self::with_schema(vec![SchemaRule::new(REQUIRED_FIELD_SLOT, Rule::Required)])
    }

    /// Creates an engine with an explicit form-level schema.
    pub const fn with_schema(schema: Vec<SchemaRule>) -> Self {
        Self { schema }
    }

    /// Returns the form-level schema.
    pub fn schema(&self) -> &[SchemaRule] {
        &self.schema
    }

    /// Runs the full validation pass over the current values.
    ///
    /// Failures accumulate in order: schema slots first, then visible
    /// fields in address order. Hidden fields are skipped — they are
    /// excluded from the submission payload, so they cannot block it.
    pub fn validate(&self, model: &FormModel, store: &ValueStore) -> ValidationReport {
        let mut report = ValidationReport::new();

        for schema_rule in &self.schema {
            let value = store.get(&Slot::Named(schema_rule.slot.clone()));
            if let Some(message) = schema_rule.rule.check(value) {
                report.push(ValidationFailure::new(&schema_rule.slot, message));
            }
        }

        for (id, address) in model.addressable() {
            let Some(field) = model.field(id) else { continue };
            if !field.visible {
                continue;
            }
            let value = store
                .get(&Slot::Field(id))
                .cloned()
                .unwrap_or_else(|| Value::default_for(field.value_kind()));

            if field.rules.required {
                if let Some(message) = Rule::Required.check(Some(&value)) {
                    report.push(ValidationFailure::new(address.to_string(), message));
                }
            }
            if let Some(pattern) = &field.rules.pattern {
                if let Some(message) = Rule::Pattern(pattern.clone()).check(Some(&value)) {
                    report.push(ValidationFailure::new(address.to_string(), message));
                }
            }
        }

        report
    }
}
