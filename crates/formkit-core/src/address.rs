//! Identity and addressing for fields and sections.
//!
//! The engine keeps two distinct notions apart:
//!
//! - **Identity** ([`FieldId`], [`SectionId`]): allocation-order identifiers
//!   handed out by a single [`IdAllocator`]. Identity is stable for the
//!   lifetime of an entity and is never reused, so value-store entries keyed
//!   by identity cannot leak across a remove/re-add cycle.
//! - **Address** ([`Address`]): the positional path (`field-0`,
//!   `section-0-field-1`) used to key submission output. Addresses are
//!   derived lazily from current positions and renumber when an earlier
//!   entity is removed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The identity of a field, unique within one allocator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FieldId(u64);

impl FieldId {
    /// Returns the raw allocation number.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity of a section, unique within one allocator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SectionId(u64);

impl SectionId {
    /// Returns the raw allocation number.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A serialized, monotonic id source shared by fields and sections.
///
/// Timestamp-based ids can collide under rapid successive creation; an
/// explicit counter cannot. One allocator serves an entire form, so every
/// field and section it ever produces carries a distinct number.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator starting at zero.
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Issues a fresh field id.
    pub fn next_field(&mut self) -> FieldId {
        let id = FieldId(self.next);
        self.next += 1;
        id
    }

    /// Issues a fresh section id.
    pub fn next_section(&mut self) -> SectionId {
        let id = SectionId(self.next);
        self.next += 1;
        id
    }
}

/// A positional address in the form tree.
///
/// Top-level fields and nested fields live in disjoint sub-trees; the
/// address spells out the path. Indices are positions in the *current*
/// ordered sequences, so callers must tolerate renumbering after a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    /// A top-level field at `index`.
    Field {
        /// Position among top-level fields.
        index: usize,
    },
    /// A field nested inside a section.
    Nested {
        /// Position of the owning section.
        section: usize,
        /// Position within the section's fields.
        index: usize,
    },
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { index } => write!(f, "field-{index}"),
            Self::Nested { section, index } => {
                write!(f, "section-{section}-field-{index}")
            }
        }
    }
}

/// A value-store key.
///
/// Field slots are keyed by stable identity; named slots cover form-level
/// logical values (such as the default schema's `requiredField`) that exist
/// outside the field tree and are addressed verbatim by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// The value of a concrete field, keyed by identity.
    Field(FieldId),
    /// A form-level logical slot, keyed by name.
    Named(String),
}

impl Slot {
    /// Convenience constructor for a named slot.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_never_repeats() {
        let mut ids = IdAllocator::new();
        let a = ids.next_field();
        let s = ids.next_section();
        let b = ids.next_field();
        assert_ne!(a, b);
        assert_ne!(a.as_u64(), s.as_u64());
        assert_ne!(b.as_u64(), s.as_u64());
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = IdAllocator::new();
        let mut last = ids.next_field().as_u64();
        for _ in 0..100 {
            let next = ids.next_field().as_u64();
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn test_address_display() {
        assert_eq!(Address::Field { index: 0 }.to_string(), "field-0");
        assert_eq!(
            Address::Nested { section: 0, index: 2 }.to_string(),
            "section-0-field-2"
        );
    }

    #[test]
    fn test_slot_ordering_groups_fields_before_names() {
        let mut ids = IdAllocator::new();
        let field = Slot::Field(ids.next_field());
        let named = Slot::named("requiredField");
        assert!(field < named);
    }
}
