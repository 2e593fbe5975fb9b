//! The mutable form tree.
//!
//! [`FormModel`] owns every [`Field`] and [`Section`] as an arena keyed by
//! allocation-order identity, with positional addresses derived lazily for
//! serialization. Structural invariants enforced here:
//!
//! - ids come from a single monotonic allocator and are never reused;
//! - default labels are historical — `"Field {n}"` counts creations, so a
//!   removal never renumbers surviving labels;
//! - choice types (dropdown, radio) always carry an options list, seeded
//!   with placeholders at creation; other types never do;
//! - visibility is a flag on the field, toggled only through
//!   [`FormModel::set_visible`].
//!
//! The model never touches value state. Removal detaches and returns the
//! entity; purging orphaned value entries is the caller's job.

use formkit_core::{Address, EngineSettings, FieldId, FormError, FormResult, IdAllocator, SectionId};

use crate::catalog::{self, FieldType};
use crate::field::{Field, FieldRules};
use crate::section::Section;

/// The mutable tree of top-level fields and sections.
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<Field>,
    sections: Vec<Section>,
    ids: IdAllocator,
    created_fields: u64,
    created_sections: u64,
    placeholder_options: Vec<String>,
    max_options: Option<usize>,
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormModel {
    /// Creates an empty model with default settings.
    pub fn new() -> Self {
        Self::with_settings(&EngineSettings::default())
    }

    /// Creates an empty model configured from engine settings.
    pub fn with_settings(settings: &EngineSettings) -> Self {
        Self {
            fields: Vec::new(),
            sections: Vec::new(),
            ids: IdAllocator::new(),
            created_fields: 0,
            created_sections: 0,
            placeholder_options: settings.placeholder_options.clone(),
            max_options: settings.max_options,
        }
    }

    // ── Structural commands ──────────────────────────────────────────

    /// Adds a top-level field of the given type. Always succeeds.
    ///
    /// The default label is `"Field {n}"` where n is the 1-based creation
    /// count. Choice types are seeded with the placeholder options.
    pub fn add_field(&mut self, field_type: FieldType) -> FieldId {
        let id = self.ids.next_field();
        self.created_fields += 1;
        let label = format!("Field {}", self.created_fields);
        let options = if catalog::spec(field_type).requires_options {
            self.placeholder_options.clone()
        } else {
            Vec::new()
        };
        self.fields.push(Field::new(id, field_type, label, options));
        id
    }

    /// Replaces a field's option list by parsing `raw` as comma-separated
    /// text. Segments are kept verbatim — no trimming, empty segments
    /// survive.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidField`] if the id is unknown or the field's type
    /// does not take options.
    pub fn update_field_options(&mut self, id: FieldId, raw: &str) -> FormResult<()> {
        let max_options = self.max_options;
        let field = self.field_mut(id).ok_or(FormError::InvalidField(id))?;
        if !field.requires_options() {
            return Err(FormError::InvalidField(id));
        }

        let mut options: Vec<String> = raw.split(',').map(str::to_string).collect();
        if let Some(max) = max_options {
            if options.len() > max {
                tracing::warn!(field = %id, kept = max, dropped = options.len() - max,
                    "option list exceeds cap, truncating");
                options.truncate(max);
            }
        }
        field.options = options;
        Ok(())
    }

    /// Adds an empty section named `"Section {n}"` (n = 1-based creation
    /// count, historical). Always succeeds.
    pub fn add_section(&mut self) -> SectionId {
        let id = self.ids.next_section();
        self.created_sections += 1;
        let name = format!("Section {}", self.created_sections);
        self.sections.push(Section::new(id, name));
        id
    }

    /// Appends a new text field to a section.
    ///
    /// The default label is `"Nested Field {m}"` where m is the 1-based
    /// creation count within that section.
    ///
    /// # Errors
    ///
    /// [`FormError::UnknownSection`] if the section id is absent.
    pub fn add_nested_field(&mut self, section_id: SectionId) -> FormResult<FieldId> {
        let id = self.ids.next_field();
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .ok_or(FormError::UnknownSection(section_id))?;
        section.created += 1;
        let label = format!("Nested Field {}", section.created);
        section
            .fields
            .push(Field::new(id, FieldType::Text, label, Vec::new()));
        Ok(id)
    }

    /// Sets a field's visibility flag. Finds both top-level and nested
    /// fields.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidField`] if the id is unknown.
    pub fn set_visible(&mut self, id: FieldId, visible: bool) -> FormResult<()> {
        let field = self.field_mut(id).ok_or(FormError::InvalidField(id))?;
        field.visible = visible;
        Ok(())
    }

    /// Declares a field's validation rules.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidField`] if the id is unknown.
    pub fn set_rules(&mut self, id: FieldId, rules: FieldRules) -> FormResult<()> {
        let field = self.field_mut(id).ok_or(FormError::InvalidField(id))?;
        field.rules = rules;
        Ok(())
    }

    /// Detaches a field (top-level or nested) and returns it.
    ///
    /// Any value entry at the field's slot becomes orphaned; the caller
    /// purges it.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidField`] if the id is unknown.
    pub fn remove_field(&mut self, id: FieldId) -> FormResult<Field> {
        if let Some(pos) = self.fields.iter().position(|f| f.id == id) {
            return Ok(self.fields.remove(pos));
        }
        for section in &mut self.sections {
            if let Some(pos) = section.fields.iter().position(|f| f.id == id) {
                return Ok(section.fields.remove(pos));
            }
        }
        Err(FormError::InvalidField(id))
    }

    /// Detaches a section with all its nested fields and returns it.
    ///
    /// # Errors
    ///
    /// [`FormError::UnknownSection`] if the id is unknown.
    pub fn remove_section(&mut self, id: SectionId) -> FormResult<Section> {
        let pos = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or(FormError::UnknownSection(id))?;
        Ok(self.sections.remove(pos))
    }

    // ── Lookup and addressing ────────────────────────────────────────

    /// Returns the top-level fields in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the sections in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a field by identity, in either sub-tree.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields
            .iter()
            .chain(self.sections.iter().flat_map(|s| s.fields.iter()))
            .find(|f| f.id == id)
    }

    /// Looks up a section by identity.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Returns `true` if a field with this identity exists.
    pub fn contains_field(&self, id: FieldId) -> bool {
        self.field(id).is_some()
    }

    /// Derives the current positional address of a field.
    ///
    /// Addresses are positions in the current sequences, so they renumber
    /// when an earlier entity is removed.
    pub fn address_of(&self, id: FieldId) -> Option<Address> {
        if let Some(index) = self.fields.iter().position(|f| f.id == id) {
            return Some(Address::Field { index });
        }
        for (section, s) in self.sections.iter().enumerate() {
            if let Some(index) = s.fields.iter().position(|f| f.id == id) {
                return Some(Address::Nested { section, index });
            }
        }
        None
    }

    /// Returns every addressable field with its current address, in tree
    /// order: top-level fields first, then each section's nested fields.
    pub fn addressable(&self) -> Vec<(FieldId, Address)> {
        let mut out = Vec::new();
        for (index, field) in self.fields.iter().enumerate() {
            out.push((field.id, Address::Field { index }));
        }
        for (section, s) in self.sections.iter().enumerate() {
            for (index, field) in s.fields.iter().enumerate() {
                out.push((field.id, Address::Nested { section, index }));
            }
        }
        out
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields
            .iter_mut()
            .chain(self.sections.iter_mut().flat_map(|s| s.fields.iter_mut()))
            .find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_field_count_and_unique_addresses() {
        let mut model = FormModel::new();
        for _ in 0..10 {
            model.add_field(FieldType::Text);
        }
        assert_eq!(model.fields().len(), 10);

        let addresses: HashSet<String> = model
            .addressable()
            .iter()
            .map(|(_, a)| a.to_string())
            .collect();
        assert_eq!(addresses.len(), 10);

        let ids: HashSet<FieldId> = model.fields().iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_default_labels_are_one_based() {
        let mut model = FormModel::new();
        let first = model.add_field(FieldType::Text);
        let second = model.add_field(FieldType::Dropdown);
        assert_eq!(model.field(first).unwrap().label, "Field 1");
        assert_eq!(model.field(second).unwrap().label, "Field 2");
    }

    #[test]
    fn test_labels_are_historical_after_removal() {
        let mut model = FormModel::new();
        let first = model.add_field(FieldType::Text);
        model.add_field(FieldType::Text);
        model.remove_field(first).unwrap();

        // a removal must not renumber survivors, and the next creation
        // continues the historical count
        assert_eq!(model.fields()[0].label, "Field 2");
        let third = model.add_field(FieldType::Text);
        assert_eq!(model.field(third).unwrap().label, "Field 3");
    }

    #[test]
    fn test_choice_fields_get_placeholder_options() {
        let mut model = FormModel::new();
        let dropdown = model.add_field(FieldType::Dropdown);
        let radio = model.add_field(FieldType::Radio);
        let text = model.add_field(FieldType::Text);

        assert_eq!(
            model.field(dropdown).unwrap().options,
            vec!["Option 1", "Option 2"]
        );
        assert_eq!(
            model.field(radio).unwrap().options,
            vec!["Option 1", "Option 2"]
        );
        assert!(model.field(text).unwrap().options.is_empty());
    }

    #[test]
    fn test_update_options_parses_comma_list() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::Dropdown);
        model.update_field_options(id, "A,B,C").unwrap();
        assert_eq!(model.field(id).unwrap().options, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_update_options_preserves_empty_segments() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::Radio);
        model.update_field_options(id, "A,,B").unwrap();
        assert_eq!(model.field(id).unwrap().options, vec!["A", "", "B"]);

        model.update_field_options(id, "").unwrap();
        assert_eq!(model.field(id).unwrap().options, vec![""]);
    }

    #[test]
    fn test_update_options_on_text_field_fails() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::Text);
        assert_eq!(
            model.update_field_options(id, "A,B"),
            Err(FormError::InvalidField(id))
        );
    }

    #[test]
    fn test_update_options_on_unknown_field_fails() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::Dropdown);
        let removed = model.remove_field(id).unwrap();
        assert!(matches!(
            model.update_field_options(removed.id, "A"),
            Err(FormError::InvalidField(_))
        ));
    }

    #[test]
    fn test_update_options_respects_cap() {
        let settings = EngineSettings::default().max_options(2);
        let mut model = FormModel::with_settings(&settings);
        let id = model.add_field(FieldType::Dropdown);
        model.update_field_options(id, "A,B,C,D").unwrap();
        assert_eq!(model.field(id).unwrap().options, vec!["A", "B"]);
    }

    #[test]
    fn test_section_names_are_historical() {
        let mut model = FormModel::new();
        let first = model.add_section();
        let second = model.add_section();
        assert_eq!(model.section(first).unwrap().name, "Section 1");
        assert_eq!(model.section(second).unwrap().name, "Section 2");

        model.remove_section(first).unwrap();
        let third = model.add_section();
        assert_eq!(model.section(third).unwrap().name, "Section 3");
    }

    #[test]
    fn test_nested_field_labels_count_within_section() {
        let mut model = FormModel::new();
        let section = model.add_section();
        model.add_nested_field(section).unwrap();
        model.add_nested_field(section).unwrap();
        let third = model.add_nested_field(section).unwrap();

        assert_eq!(model.field(third).unwrap().label, "Nested Field 3");
        assert_eq!(model.section(section).unwrap().fields.len(), 3);

        // a second section counts from one again
        let other = model.add_section();
        let nested = model.add_nested_field(other).unwrap();
        assert_eq!(model.field(nested).unwrap().label, "Nested Field 1");
    }

    #[test]
    fn test_nested_fields_are_text_typed() {
        let mut model = FormModel::new();
        let section = model.add_section();
        let nested = model.add_nested_field(section).unwrap();
        assert_eq!(model.field(nested).unwrap().field_type, FieldType::Text);
    }

    #[test]
    fn test_add_nested_to_unknown_section_fails() {
        let mut model = FormModel::new();
        let section = model.add_section();
        let removed = model.remove_section(section).unwrap();
        assert_eq!(
            model.add_nested_field(removed.id),
            Err(FormError::UnknownSection(removed.id))
        );
    }

    #[test]
    fn test_set_visible() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::Text);
        assert!(model.field(id).unwrap().visible);

        model.set_visible(id, false).unwrap();
        assert!(!model.field(id).unwrap().visible);

        let section = model.add_section();
        let nested = model.add_nested_field(section).unwrap();
        model.set_visible(nested, false).unwrap();
        assert!(!model.field(nested).unwrap().visible);
    }

    #[test]
    fn test_set_visible_unknown_field_fails() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::Text);
        model.remove_field(id).unwrap();
        assert_eq!(
            model.set_visible(id, false),
            Err(FormError::InvalidField(id))
        );
    }

    #[test]
    fn test_set_rules() {
        let mut model = FormModel::new();
        let id = model.add_field(FieldType::Text);
        model
            .set_rules(id, FieldRules::none().required(true))
            .unwrap();
        assert!(model.field(id).unwrap().rules.required);
    }

    #[test]
    fn test_addresses_renumber_after_removal() {
        let mut model = FormModel::new();
        let first = model.add_field(FieldType::Text);
        let second = model.add_field(FieldType::Text);
        assert_eq!(
            model.address_of(second).unwrap().to_string(),
            "field-1"
        );

        model.remove_field(first).unwrap();
        assert_eq!(
            model.address_of(second).unwrap().to_string(),
            "field-0"
        );
    }

    #[test]
    fn test_nested_addresses() {
        let mut model = FormModel::new();
        model.add_section();
        let section = model.add_section();
        model.add_nested_field(section).unwrap();
        let nested = model.add_nested_field(section).unwrap();
        assert_eq!(
            model.address_of(nested).unwrap().to_string(),
            "section-1-field-1"
        );
    }

    #[test]
    fn test_addressable_tree_order() {
        let mut model = FormModel::new();
        model.add_field(FieldType::Text);
        let section = model.add_section();
        model.add_nested_field(section).unwrap();
        model.add_field(FieldType::Checkbox);

        let addresses: Vec<String> = model
            .addressable()
            .iter()
            .map(|(_, a)| a.to_string())
            .collect();
        // top-level fields first, then nested, regardless of creation order
        assert_eq!(addresses, vec!["field-0", "field-1", "section-0-field-0"]);
    }

    #[test]
    fn test_remove_section_returns_nested_fields() {
        let mut model = FormModel::new();
        let section = model.add_section();
        model.add_nested_field(section).unwrap();
        model.add_nested_field(section).unwrap();

        let removed = model.remove_section(section).unwrap();
        assert_eq!(removed.fields.len(), 2);
        assert!(model.sections().is_empty());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut model = FormModel::new();
        let first = model.add_field(FieldType::Text);
        model.remove_field(first).unwrap();
        let second = model.add_field(FieldType::Text);
        assert_ne!(first, second);
    }
}
