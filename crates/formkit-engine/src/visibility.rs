//! Conditional visibility.
//!
//! The legacy path is a side-channel: a UI event carries a string signal and
//! a target field, and the field becomes visible exactly when the signal is
//! `"show"`. [`VisibilityEngine::apply_condition`] reproduces that mapping.
//!
//! The general path is the [`Condition`] trait — a predicate over the live
//! snapshot — so future condition sources compose without special-casing
//! the input widget. Bindings registered on the engine are re-evaluated by
//! [`VisibilityEngine::refresh`]. Sections have no visibility concept;
//! field visibility gates submitted/rendered output only, never membership
//! in the model tree.

use formkit_core::{FieldId, FormResult, Value};
use formkit_model::{Field, FormModel};

use crate::snapshot::FormSnapshot;

/// The signal value that makes a field visible.
pub const SHOW_SIGNAL: &str = "show";

/// A visibility predicate evaluated against the live snapshot.
pub trait Condition: Send + Sync {
    /// Returns the visibility the bound field should take.
    fn evaluate(&self, snapshot: &FormSnapshot) -> bool;
}

/// The built-in condition: a watched slot's textual value equals an
/// expected signal.
///
/// `SignalEquals::show_signal("field-1")` reproduces the radio-button
/// behavior — the bound field is visible while the watched slot holds
/// `"show"`.
#[derive(Debug, Clone)]
pub struct SignalEquals {
    /// The snapshot address to watch.
    pub address: String,
    /// The value that makes the bound field visible.
    pub expected: String,
}

impl SignalEquals {
    /// Creates a condition comparing a slot to an arbitrary signal.
    pub fn new(address: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            expected: expected.into(),
        }
    }

    /// Creates the `"show"` condition on a slot.
    pub fn show_signal(address: impl Into<String>) -> Self {
        Self::new(address, SHOW_SIGNAL)
    }
}

impl Condition for SignalEquals {
    fn evaluate(&self, snapshot: &FormSnapshot) -> bool {
        matches!(
            snapshot.get(&self.address),
            Some(Value::Text(s) | Value::Phone(s)) if *s == self.expected
        )
    }
}

/// Evaluates visibility for fields.
#[derive(Default)]
pub struct VisibilityEngine {
    bindings: Vec<(FieldId, Box<dyn Condition>)>,
}

impl VisibilityEngine {
    /// Creates an engine with no registered conditions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a field participates in rendered/submitted output.
    pub const fn is_visible(field: &Field) -> bool {
        field.visible
    }

    /// Applies a raw UI signal to a field: visible iff the signal is
    /// [`SHOW_SIGNAL`].
    ///
    /// # Errors
    ///
    /// Propagates [`FormError::InvalidField`](formkit_core::FormError) for
    /// an unknown field.
    pub fn apply_condition(
        model: &mut FormModel,
        field: FieldId,
        signal: &str,
    ) -> FormResult<()> {
        model.set_visible(field, signal == SHOW_SIGNAL)
    }

    /// Binds a condition to a field. A later binding for the same field
    /// replaces the earlier one.
    pub fn bind(&mut self, field: FieldId, condition: Box<dyn Condition>) {
        if let Some(entry) = self.bindings.iter_mut().find(|(id, _)| *id == field) {
            entry.1 = condition;
        } else {
            self.bindings.push((field, condition));
        }
    }

    /// Removes the binding for a field, returning `true` if one existed.
    pub fn unbind(&mut self, field: FieldId) -> bool {
        let len_before = self.bindings.len();
        self.bindings.retain(|(id, _)| *id != field);
        self.bindings.len() < len_before
    }

    /// Returns the number of registered bindings.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Re-evaluates every binding against a snapshot, updating the model's
    /// visibility flags. Bindings whose field no longer exists are skipped.
    pub fn refresh(&self, model: &mut FormModel, snapshot: &FormSnapshot) -> FormResult<()> {
        for (field, condition) in &self.bindings {
            if !model.contains_field(*field) {
                continue;
            }
            model.set_visible(*field, condition.evaluate(snapshot))?;
        }
        Ok(())
    }
}
