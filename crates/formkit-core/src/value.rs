//! Value types carried by the form engine.
//!
//! The [`Value`] enum is the single representation for everything a field can
//! hold: text, booleans, dates, phone strings, and opaque file handles. Each
//! field type declares which [`ValueKind`] it produces, and absent entries
//! take a per-kind default via [`Value::default_for`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// The primitive kind of value a field produces.
///
/// This is a closed enumeration: every field type maps to exactly one kind,
/// and the mapping is total (see the catalog in `formkit-model`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// A UTF-8 string.
    Text,
    /// A true/false flag.
    Bool,
    /// An opaque file handle.
    File,
    /// A calendar date.
    Date,
    /// A phone number kept as a formatted string.
    PhoneNumber,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Bool => "bool",
            Self::File => "file",
            Self::Date => "date",
            Self::PhoneNumber => "phone",
        };
        write!(f, "{name}")
    }
}

/// An opaque reference to an uploaded file.
///
/// The engine never holds file bytes; a `FileRef` carries only the display
/// name reported by the input layer. Submission payloads serialize the
/// handle as this name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// The file name as reported by the uploader.
    pub name: String,
}

impl FileRef {
    /// Creates a file handle from a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A single field value.
///
/// `Value` is the universal type passed between the model layer and the
/// value store. Callers produce a correctly-kinded value for the owning
/// field; the engine performs no coercion.
///
/// # Examples
///
/// ```
/// use formkit_core::value::{Value, ValueKind};
///
/// let v = Value::from("hello");
/// assert_eq!(v.kind(), Some(ValueKind::Text));
/// assert!(!v.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// No value.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A UTF-8 string.
    Text(String),
    /// A calendar date.
    Date(chrono::NaiveDate),
    /// A phone number in its formatted string form.
    Phone(String),
    /// An opaque file handle.
    File(FileRef),
}

impl Value {
    /// Returns the kind of this value, or `None` for [`Value::Null`].
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(ValueKind::Bool),
            Self::Text(_) => Some(ValueKind::Text),
            Self::Date(_) => Some(ValueKind::Date),
            Self::Phone(_) => Some(ValueKind::PhoneNumber),
            Self::File(_) => Some(ValueKind::File),
        }
    }

    /// Returns `true` if this value counts as missing for validation.
    ///
    /// `Null` and empty strings are empty; `Bool(false)` is a real value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) | Self::Phone(s) => s.is_empty(),
            Self::Bool(_) | Self::Date(_) | Self::File(_) => false,
        }
    }

    /// Returns the default value recorded for an absent entry of `kind`.
    pub fn default_for(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Text => Self::Text(String::new()),
            ValueKind::Bool => Self::Bool(false),
            ValueKind::PhoneNumber => Self::Phone(String::new()),
            ValueKind::Date | ValueKind::File => Self::Null,
        }
    }

    /// Projects this value into the plain JSON used by submission payloads.
    ///
    /// Strings stay strings, booleans stay booleans, dates become
    /// `"YYYY-MM-DD"`, and file handles become their display name. This is
    /// intentionally lossier than the tagged serde representation.
    pub fn to_plain_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Text(s) | Self::Phone(s) => serde_json::Value::String(s.clone()),
            Self::Date(d) => serde_json::Value::String(d.to_string()),
            Self::File(handle) => serde_json::Value::String(handle.name.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) | Self::Phone(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::File(handle) => write!(f, "{handle}"),
        }
    }
}

// ── From implementations ───────────────────────────────────────────────

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(v: chrono::NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<FileRef> for Value {
    fn from(v: FileRef) -> Self {
        Self::File(v)
    }
}
