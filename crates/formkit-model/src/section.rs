//! Section entities: named, ordered groups of nested fields.

use formkit_core::SectionId;

use crate::field::Field;

/// A named group of nested fields.
///
/// A section's fields form a sub-tree disjoint from the top-level fields:
/// they share the [`Field`] shape but live under a different address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Stable identity, unique within the owning model.
    pub id: SectionId,
    /// Display name. Historical: assigned at creation, never renumbered.
    pub name: String,
    /// The nested fields, in append order.
    pub fields: Vec<Field>,
    // Monotone count of nested fields ever created, so default labels
    // stay historical after a removal.
    pub(crate) created: u64,
}

impl Section {
    pub(crate) fn new(id: SectionId, name: String) -> Self {
        Self {
            id,
            name,
            fields: Vec::new(),
            created: 0,
        }
    }
}
