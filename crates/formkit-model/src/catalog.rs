//! The field type catalog.
//!
//! [`FieldType`] is the closed enumeration of supported field kinds. The
//! catalog declares, per variant, whether the type carries an options list
//! and which primitive value it produces. [`spec`] is total and pure: every
//! variant is handled, there is no error path.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use formkit_core::ValueKind;

/// A supported field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// A free-text input.
    Text,
    /// A single-choice dropdown. Carries options.
    Dropdown,
    /// A radio-button group. Carries options.
    Radio,
    /// A true/false checkbox.
    Checkbox,
    /// A file upload.
    File,
    /// A country picker producing a phone-format string.
    Country,
    /// A date picker.
    Date,
    /// A phone number input.
    Phone,
}

impl FieldType {
    /// Parses the lowercase keyword form (`"text"`, `"dropdown"`, ...).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "text" => Some(Self::Text),
            "dropdown" => Some(Self::Dropdown),
            "radio" => Some(Self::Radio),
            "checkbox" => Some(Self::Checkbox),
            "file" => Some(Self::File),
            "country" => Some(Self::Country),
            "date" => Some(Self::Date),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Text => "text",
            Self::Dropdown => "dropdown",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::File => "file",
            Self::Country => "country",
            Self::Date => "date",
            Self::Phone => "phone",
        };
        write!(f, "{keyword}")
    }
}

/// The structural contract of one field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpec {
    /// Whether fields of this type carry an options list.
    pub requires_options: bool,
    /// The primitive value kind fields of this type produce.
    pub value_kind: ValueKind,
    /// Human-readable name shown in an add-field menu.
    pub display: &'static str,
}

/// Returns the structural contract for a field type.
pub const fn spec(field_type: FieldType) -> TypeSpec {
    match field_type {
        FieldType::Text => TypeSpec {
            requires_options: false,
            value_kind: ValueKind::Text,
            display: "Text Field",
        },
        FieldType::Dropdown => TypeSpec {
            requires_options: true,
            value_kind: ValueKind::Text,
            display: "Dropdown",
        },
        FieldType::Radio => TypeSpec {
            requires_options: true,
            value_kind: ValueKind::Text,
            display: "Radio Button",
        },
        FieldType::Checkbox => TypeSpec {
            requires_options: false,
            value_kind: ValueKind::Bool,
            display: "Checkbox",
        },
        FieldType::File => TypeSpec {
            requires_options: false,
            value_kind: ValueKind::File,
            display: "File Upload",
        },
        FieldType::Country => TypeSpec {
            requires_options: false,
            value_kind: ValueKind::PhoneNumber,
            display: "Country (Phone Format)",
        },
        FieldType::Date => TypeSpec {
            requires_options: false,
            value_kind: ValueKind::Date,
            display: "Date Picker",
        },
        FieldType::Phone => TypeSpec {
            requires_options: false,
            value_kind: ValueKind::PhoneNumber,
            display: "Phone Number",
        },
    }
}

/// Every supported field type with its spec, in menu order.
pub static FIELD_TYPES: Lazy<Vec<(FieldType, TypeSpec)>> = Lazy::new(|| {
    [
        FieldType::Text,
        FieldType::Dropdown,
        FieldType::Radio,
        FieldType::File,
        FieldType::Checkbox,
        FieldType::Country,
        FieldType::Date,
        FieldType::Phone,
    ]
    .into_iter()
    .map(|ft| (ft, spec(ft)))
    .collect()
});
