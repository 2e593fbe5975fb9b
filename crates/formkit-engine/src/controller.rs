//! The form controller.
//!
//! [`FormController`] is the composition root: it owns exactly one
//! [`FormModel`], one [`ValueStore`], the visibility and validation
//! engines, and the signal bundle. UI-originated commands come through
//! here; the controller keeps the pieces consistent (kind-checked value
//! edits, orphan purging on removal) and emits a signal after each
//! mutation commits so a rendering layer knows to re-read
//! [`FormController::watch_all`].

use uuid::Uuid;

use formkit_core::logging::form_span;
use formkit_core::{
    EngineSettings, FieldId, FormError, FormResult, SectionId, Slot, ValidationReport, Value,
};
use formkit_model::{Field, FieldRules, FieldType, FormModel, Section};
use formkit_signals::{
    FieldAdded, FieldRemoved, FormSignals, FormSubmitted, NestedFieldAdded, OptionsChanged,
    SectionAdded, SectionRemoved, ValueChanged, VisibilityChanged,
};

use crate::snapshot::FormSnapshot;
use crate::validation::ValidationEngine;
use crate::values::ValueStore;
use crate::visibility::{Condition, VisibilityEngine, SHOW_SIGNAL};

/// Owns and orchestrates one form.
pub struct FormController {
    id: Uuid,
    model: FormModel,
    values: ValueStore,
    visibility: VisibilityEngine,
    validation: ValidationEngine,
    signals: FormSignals,
    span: tracing::Span,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Creates a controller with default settings and the default
    /// validation schema.
    pub fn new() -> Self {
        Self::with_settings(&EngineSettings::default())
    }

    /// Creates a controller configured from engine settings.
    pub fn with_settings(settings: &EngineSettings) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            model: FormModel::with_settings(settings),
            values: ValueStore::new(),
            visibility: VisibilityEngine::new(),
            validation: ValidationEngine::new(),
            signals: FormSignals::new(),
            span: form_span(&id.to_string()),
        }
    }

    /// Replaces the validation engine (custom form-level schema).
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationEngine) -> Self {
        self.validation = validation;
        self
    }

    /// Returns this form's instance id.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the model for read-only inspection.
    pub const fn model(&self) -> &FormModel {
        &self.model
    }

    /// Returns the value store for read-only inspection.
    pub const fn values(&self) -> &ValueStore {
        &self.values
    }

    /// Returns the signal bundle for connecting receivers.
    pub const fn signals(&self) -> &FormSignals {
        &self.signals
    }

    // ── Structural commands ──────────────────────────────────────────

    /// Adds a top-level field of the given type.
    pub fn add_field(&mut self, field_type: FieldType) -> FieldId {
        let _guard = self.span.enter();
        let field = self.model.add_field(field_type);
        tracing::debug!(%field, %field_type, "field added");
        self.signals.field_added.send(&FieldAdded { field });
        field
    }

    /// Replaces a field's options from comma-separated text.
    pub fn update_field_options(&mut self, field: FieldId, raw: &str) -> FormResult<()> {
        let _guard = self.span.enter();
        self.model.update_field_options(field, raw)?;
        tracing::debug!(%field, "options updated");
        self.signals.options_changed.send(&OptionsChanged { field });
        Ok(())
    }

    /// Adds an empty section.
    pub fn add_section(&mut self) -> SectionId {
        let _guard = self.span.enter();
        let section = self.model.add_section();
        tracing::debug!(%section, "section added");
        self.signals.section_added.send(&SectionAdded { section });
        section
    }

    /// Appends a new text field to a section.
    pub fn add_nested_field(&mut self, section: SectionId) -> FormResult<FieldId> {
        let _guard = self.span.enter();
        let field = self.model.add_nested_field(section)?;
        tracing::debug!(%section, %field, "nested field added");
        self.signals
            .nested_field_added
            .send(&NestedFieldAdded { section, field });
        Ok(field)
    }

    /// Declares a field's validation rules.
    pub fn set_rules(&mut self, field: FieldId, rules: FieldRules) -> FormResult<()> {
        let _guard = self.span.enter();
        self.model.set_rules(field, rules)
    }

    /// Detaches a field and purges its orphaned value entry.
    pub fn remove_field(&mut self, field: FieldId) -> FormResult<Field> {
        let _guard = self.span.enter();
        let removed = self.model.remove_field(field)?;
        self.values.remove(&Slot::Field(field));
        self.visibility.unbind(field);
        tracing::debug!(%field, "field removed");
        self.signals.field_removed.send(&FieldRemoved { field });
        Ok(removed)
    }

    /// Detaches a section and purges every nested field's value entry.
    pub fn remove_section(&mut self, section: SectionId) -> FormResult<Section> {
        let _guard = self.span.enter();
        let removed = self.model.remove_section(section)?;
        for nested in &removed.fields {
            self.values.remove(&Slot::Field(nested.id));
            self.visibility.unbind(nested.id);
        }
        tracing::debug!(%section, "section removed");
        self.signals.section_removed.send(&SectionRemoved { section });
        Ok(removed)
    }

    // ── Value commands ───────────────────────────────────────────────

    /// Records a field's value.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidField`] for an unknown field;
    /// [`FormError::TypeMismatch`] if the value's kind conflicts with the
    /// field's declared kind. `Null` is accepted for any kind.
    pub fn set_value(&mut self, field: FieldId, value: Value) -> FormResult<()> {
        let _guard = self.span.enter();
        let declared = self
            .model
            .field(field)
            .ok_or(FormError::InvalidField(field))?
            .value_kind();
        if let Some(got) = value.kind() {
            if got != declared {
                return Err(FormError::TypeMismatch {
                    expected: declared,
                    got,
                });
            }
        }
        let slot = Slot::Field(field);
        self.values.set(slot.clone(), value);
        self.signals.value_changed.send(&ValueChanged { slot });
        Ok(())
    }

    /// Records a form-level named slot (e.g. `requiredField`).
    pub fn set_named(&mut self, name: impl Into<String>, value: Value) {
        let _guard = self.span.enter();
        let slot = Slot::named(name);
        self.values.set(slot.clone(), value);
        self.signals.value_changed.send(&ValueChanged { slot });
    }

    // ── Visibility commands ──────────────────────────────────────────

    /// Sets a field's visibility flag directly.
    pub fn set_visible(&mut self, field: FieldId, visible: bool) -> FormResult<()> {
        let _guard = self.span.enter();
        self.model.set_visible(field, visible)?;
        self.signals
            .visibility_changed
            .send(&VisibilityChanged { field, visible });
        Ok(())
    }

    /// Applies a raw UI signal to a field: visible iff the signal is
    /// `"show"`.
    pub fn apply_condition(&mut self, field: FieldId, signal: &str) -> FormResult<()> {
        let _guard = self.span.enter();
        VisibilityEngine::apply_condition(&mut self.model, field, signal)?;
        let visible = signal == SHOW_SIGNAL;
        tracing::debug!(%field, signal, visible, "condition applied");
        self.signals
            .visibility_changed
            .send(&VisibilityChanged { field, visible });
        Ok(())
    }

    /// Binds a snapshot condition to a field.
    pub fn bind_condition(&mut self, field: FieldId, condition: Box<dyn Condition>) {
        self.visibility.bind(field, condition);
    }

    /// Re-evaluates all bound conditions against the live snapshot.
    pub fn refresh_visibility(&mut self) -> FormResult<()> {
        let _guard = self.span.enter();
        let snapshot = self.values.watch_all(&self.model);
        self.visibility.refresh(&mut self.model, &snapshot)
    }

    // ── Reads and submission ─────────────────────────────────────────

    /// Returns the full live mapping (hidden fields included).
    pub fn watch_all(&self) -> FormSnapshot {
        self.values.watch_all(&self.model)
    }

    /// Validates and, on success, commits the submission payload.
    ///
    /// # Errors
    ///
    /// Returns the non-empty [`ValidationReport`] when validation fails.
    /// The failure is recoverable: fix the values and submit again.
    pub fn submit(&self) -> Result<FormSnapshot, ValidationReport> {
        let _guard = self.span.enter();
        let report = self.validation.validate(&self.model, &self.values);
        if !report.is_empty() {
            tracing::debug!(failures = report.len(), "submission rejected");
            return Err(report);
        }

        let snapshot = self.values.snapshot_for_submit(&self.model);
        tracing::info!(payload = %snapshot, "form data committed");
        self.signals.form_submitted.send(&FormSubmitted {
            entries: snapshot.len(),
        });
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use formkit_core::ValueKind;

    use crate::visibility::SignalEquals;

    #[test]
    fn test_set_value_rejects_wrong_kind() {
        let mut form = FormController::new();
        let text = form.add_field(FieldType::Text);

        assert_eq!(
            form.set_value(text, Value::Bool(true)),
            Err(FormError::TypeMismatch {
                expected: ValueKind::Text,
                got: ValueKind::Bool,
            })
        );
        assert!(form.set_value(text, Value::from("ok")).is_ok());
        // Null clears any kind
        assert!(form.set_value(text, Value::Null).is_ok());
    }

    #[test]
    fn test_set_value_unknown_field() {
        let mut form = FormController::new();
        let field = form.add_field(FieldType::Text);
        form.remove_field(field).unwrap();
        assert_eq!(
            form.set_value(field, Value::from("x")),
            Err(FormError::InvalidField(field))
        );
    }

    #[test]
    fn test_remove_field_purges_value() {
        let mut form = FormController::new();
        let field = form.add_field(FieldType::Text);
        form.set_value(field, Value::from("gone")).unwrap();
        assert_eq!(form.values().len(), 1);

        form.remove_field(field).unwrap();
        assert!(form.values().is_empty());
    }

    #[test]
    fn test_remove_section_purges_nested_values() {
        let mut form = FormController::new();
        let section = form.add_section();
        let a = form.add_nested_field(section).unwrap();
        let b = form.add_nested_field(section).unwrap();
        form.set_value(a, Value::from("1")).unwrap();
        form.set_value(b, Value::from("2")).unwrap();

        form.remove_section(section).unwrap();
        assert!(form.values().is_empty());
    }

    #[test]
    fn test_submit_requires_required_field() {
        let mut form = FormController::new();
        let report = form.submit().unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.failures()[0].slot, "requiredField");
        assert_eq!(report.failures()[0].message, "This field is required");

        form.set_named("requiredField", Value::from("present"));
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_signals_fire_on_mutation() {
        let mut form = FormController::new();
        let value_edits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&value_edits);
        form.signals().value_changed.connect(
            "spy",
            Arc::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let field = form.add_field(FieldType::Text);
        form.set_value(field, Value::from("a")).unwrap();
        form.set_named("requiredField", Value::from("b"));
        assert_eq!(value_edits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_refresh_visibility_round_trip() {
        let mut form = FormController::new();
        let radio = form.add_field(FieldType::Radio);
        let target = form.add_field(FieldType::Text);
        form.update_field_options(radio, "show,hide").unwrap();
        form.bind_condition(target, Box::new(SignalEquals::show_signal("field-0")));

        form.set_value(radio, Value::from("hide")).unwrap();
        form.refresh_visibility().unwrap();
        assert!(!form.model().field(target).unwrap().visible);

        form.set_value(radio, Value::from("show")).unwrap();
        form.refresh_visibility().unwrap();
        assert!(form.model().field(target).unwrap().visible);
    }

    #[test]
    fn test_custom_schema() {
        use crate::validation::{Rule, SchemaRule, ValidationEngine};

        let mut form = FormController::new()
            .with_validation(ValidationEngine::with_schema(vec![SchemaRule::new(
                "consent",
                Rule::Required,
            )]));

        let report = form.submit().unwrap_err();
        assert_eq!(report.failures()[0].slot, "consent");

        form.set_named("consent", Value::from("agreed"));
        assert!(form.submit().is_ok());
    }
}
