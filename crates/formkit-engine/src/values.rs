//! The live value store.
//!
//! [`ValueStore`] holds the current value for every written slot. Field
//! slots are keyed by stable identity, so entries survive address
//! renumbering and can never leak from a removed field into a later one.
//! Reads project the store through the model into a [`FormSnapshot`]:
//! `watch_all` for live display, `snapshot_for_submit` for the submission
//! payload. Both are pure; every `set` is observable by the very next read.

use std::collections::BTreeMap;

use formkit_core::{Slot, Value};
use formkit_model::FormModel;

use crate::snapshot::FormSnapshot;

/// Live values keyed by slot.
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    entries: BTreeMap<Slot, Value>,
}

impl ValueStore {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Writes a slot, overwriting any previous value. No coercion is
    /// performed; the caller supplies a value of the owning field's kind.
    pub fn set(&mut self, slot: Slot, value: Value) {
        self.entries.insert(slot, value);
    }

    /// Returns the value at a slot, if one was written.
    pub fn get(&self, slot: &Slot) -> Option<&Value> {
        self.entries.get(slot)
    }

    /// Removes a slot's entry, returning it. Used to purge orphans after a
    /// field or section removal.
    pub fn remove(&mut self, slot: &Slot) -> Option<Value> {
        self.entries.remove(slot)
    }

    /// Returns the number of written slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Projects the full current mapping for live display.
    ///
    /// Every addressable field appears — visible or not — with absent
    /// entries filled by the per-kind default. Named slots follow in name
    /// order.
    pub fn watch_all(&self, model: &FormModel) -> FormSnapshot {
        self.project(model, false)
    }

    /// Projects the mapping committed at submit time.
    ///
    /// Identical to [`ValueStore::watch_all`] except that fields whose
    /// visibility flag is off are excluded from the output.
    pub fn snapshot_for_submit(&self, model: &FormModel) -> FormSnapshot {
        self.project(model, true)
    }

    fn project(&self, model: &FormModel, visible_only: bool) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        for (id, address) in model.addressable() {
            let Some(field) = model.field(id) else { continue };
            if visible_only && !field.visible {
                continue;
            }
            let value = self
                .entries
                .get(&Slot::Field(id))
                .cloned()
                .unwrap_or_else(|| Value::default_for(field.value_kind()));
            snapshot.push(address.to_string(), value);
        }
        // BTreeMap ordering puts named slots after field slots, names sorted
        for (slot, value) in &self.entries {
            if let Slot::Named(name) = slot {
                snapshot.push(name.clone(), value.clone());
            }
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_core::{FileRef, ValueKind};
    use formkit_model::FieldType;

    #[test]
    fn test_set_then_read_is_synchronous() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::Text);

        let mut store = ValueStore::new();
        assert_eq!(
            store.watch_all(&model).get("field-0"),
            Some(&Value::Text(String::new()))
        );

        store.set(Slot::Field(id), Value::from("hello"));
        assert_eq!(
            store.watch_all(&model).get("field-0"),
            Some(&Value::from("hello"))
        );
    }

    #[test]
    fn test_absent_entries_take_per_kind_defaults() {
        let mut model = FormModel::new();
        model.add_field(FieldType::Text);
        model.add_field(FieldType::Checkbox);
        model.add_field(FieldType::Date);
        model.add_field(FieldType::Phone);

        let store = ValueStore::new();
        let snapshot = store.watch_all(&model);
        assert_eq!(snapshot.get("field-0"), Some(&Value::Text(String::new())));
        assert_eq!(snapshot.get("field-1"), Some(&Value::Bool(false)));
        assert_eq!(snapshot.get("field-2"), Some(&Value::Null));
        assert_eq!(snapshot.get("field-3"), Some(&Value::Phone(String::new())));
    }

    #[test]
    fn test_hidden_fields_stay_in_watch_but_leave_submit() {
        let mut model = FormModel::new();
        let shown = model.add_field(FieldType::Text);
        let hidden = model.add_field(FieldType::Text);
        model.set_visible(hidden, false).unwrap();

        let mut store = ValueStore::new();
        store.set(Slot::Field(shown), Value::from("a"));
        store.set(Slot::Field(hidden), Value::from("b"));

        let watch = store.watch_all(&model);
        assert!(watch.contains("field-0"));
        assert!(watch.contains("field-1"));

        let submit = store.snapshot_for_submit(&model);
        assert!(submit.contains("field-0"));
        assert!(!submit.contains("field-1"));
    }

    #[test]
    fn test_identity_keying_survives_renumbering() {
        let mut model = FormModel::new();
        let first = model.add_field(FieldType::Text);
        let second = model.add_field(FieldType::Text);

        let mut store = ValueStore::new();
        store.set(Slot::Field(second), Value::from("kept"));

        // removing the first field shifts the second to address field-0
        model.remove_field(first).unwrap();
        store.remove(&Slot::Field(first));

        let snapshot = store.watch_all(&model);
        assert_eq!(snapshot.get("field-0"), Some(&Value::from("kept")));
    }

    #[test]
    fn test_removed_field_value_never_leaks_into_new_field() {
        let mut model = FormModel::new();
        let old = model.add_field(FieldType::Text);

        let mut store = ValueStore::new();
        store.set(Slot::Field(old), Value::from("stale"));

        model.remove_field(old).unwrap();
        store.remove(&Slot::Field(old));

        // the replacement occupies the same address but a fresh identity
        let fresh = model.add_field(FieldType::Text);
        assert_ne!(old, fresh);
        let snapshot = store.watch_all(&model);
        assert_eq!(snapshot.get("field-0"), Some(&Value::Text(String::new())));
    }

    #[test]
    fn test_named_slots_follow_field_slots() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::Text);

        let mut store = ValueStore::new();
        store.set(Slot::named("requiredField"), Value::from("ok"));
        store.set(Slot::Field(id), Value::from("hi"));

        let snapshot = store.watch_all(&model);
        let addresses: Vec<&str> = snapshot.iter().map(|(a, _)| a).collect();
        assert_eq!(addresses, vec!["field-0", "requiredField"]);
    }

    #[test]
    fn test_nested_addresses_in_snapshot() {
        let mut model = FormModel::new();
        let section = model.add_section();
        let nested = model.add_nested_field(section).unwrap();

        let mut store = ValueStore::new();
        store.set(Slot::Field(nested), Value::from("x"));

        let snapshot = store.watch_all(&model);
        assert_eq!(snapshot.get("section-0-field-0"), Some(&Value::from("x")));
    }

    #[test]
    fn test_file_values_project_to_handle_name() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::File);
        assert_eq!(model.field(id).unwrap().value_kind(), ValueKind::File);

        let mut store = ValueStore::new();
        store.set(Slot::Field(id), Value::File(FileRef::new("resume.pdf")));

        let json = store.snapshot_for_submit(&model).to_json();
        assert_eq!(json["field-0"], serde_json::json!("resume.pdf"));
    }
}
