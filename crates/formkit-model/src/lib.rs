//! # formkit-model
//!
//! The mutable form tree for the formkit engine. Provides the field type
//! catalog, `Field` and `Section` entities, and [`FormModel`] — the arena
//! that owns them and enforces the structural invariants (unique ids,
//! type-dependent options, historical default labels, positional
//! addressing).

pub mod catalog;
pub mod field;
pub mod model;
pub mod section;

pub use catalog::{FieldType, TypeSpec, FIELD_TYPES};
pub use field::{Field, FieldRules};
pub use model::FormModel;
pub use section::Section;
