//! Field entities and their declarative validation rules.

use formkit_core::{FieldId, ValueKind};

use crate::catalog::{self, FieldType};

/// Declarative validation rules a field may carry.
///
/// Rules default to none; the validation engine evaluates declared rules
/// against the value store at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules {
    /// The field must hold a non-empty value.
    pub required: bool,
    /// Regex the field's textual value must match.
    pub pattern: Option<String>,
}

impl FieldRules {
    /// Creates an empty rule set.
    pub const fn none() -> Self {
        Self {
            required: false,
            pattern: None,
        }
    }

    /// Sets the required rule.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets a pattern rule.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// A single addressable input slot.
///
/// Fields are created by the model's add commands and mutated only through
/// model operations (options update, visibility toggle, rule declaration) —
/// never by a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Stable identity, unique within the owning model.
    pub id: FieldId,
    /// The declared type, controlling options and value kind.
    pub field_type: FieldType,
    /// Display label. Historical: assigned at creation, never renumbered.
    pub label: String,
    /// Choice options; non-empty iff the type requires them.
    pub options: Vec<String>,
    /// Whether the field participates in rendered/submitted output.
    pub visible: bool,
    /// Declared validation rules.
    pub rules: FieldRules,
}

impl Field {
    pub(crate) fn new(
        id: FieldId,
        field_type: FieldType,
        label: String,
        options: Vec<String>,
    ) -> Self {
        Self {
            id,
            field_type,
            label,
            options,
            visible: true,
            rules: FieldRules::none(),
        }
    }

    /// Returns `true` if this field's type carries an options list.
    pub const fn requires_options(&self) -> bool {
        catalog::spec(self.field_type).requires_options
    }

    /// Returns the primitive value kind this field produces.
    pub const fn value_kind(&self) -> ValueKind {
        catalog::spec(self.field_type).value_kind
    }
}
