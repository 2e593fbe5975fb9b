//! Point-in-time projections of the value state.
//!
//! A [`FormSnapshot`] is an ordered mapping from address string to value,
//! produced by the store's read operations and consumed by rendering layers
//! and the submission boundary. Producing a snapshot never mutates the
//! model or the store.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use formkit_core::Value;

/// An ordered address → value mapping.
///
/// Entry order is the tree order of the producing read: top-level fields,
/// then each section's nested fields, then named slots. Serialization emits
/// the plain JSON object of the submission contract, e.g.
/// `{"field-0":"hi","section-0-field-0":"x"}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    entries: Vec<(String, Value)>,
}

impl FormSnapshot {
    /// Creates an empty snapshot.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub(crate) fn push(&mut self, address: impl Into<String>, value: Value) {
        self.entries.push((address.into(), value));
    }

    /// Returns the value at an address, if present.
    pub fn get(&self, address: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(a, _)| a == address)
            .map(|(_, v)| v)
    }

    /// Returns `true` if the address is present.
    pub fn contains(&self, address: &str) -> bool {
        self.get(address).is_some()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(a, v)| (a.as_str(), v))
    }

    /// Projects the snapshot into a plain JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(self.entries.len());
        for (address, value) in &self.entries {
            map.insert(address.clone(), value.to_plain_json());
        }
        serde_json::Value::Object(map)
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (address, value) in &self.entries {
            map.serialize_entry(address, &value.to_plain_json())?;
        }
        map.end()
    }
}

impl fmt::Display for FormSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl<'a> IntoIterator for &'a FormSnapshot {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
