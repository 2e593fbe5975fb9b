//! # formkit-core
//!
//! Core types for the formkit engine. This crate has no internal dependencies
//! and provides the foundation for all other crates.
//!
//! ## Modules
//!
//! - [`address`] - Identifiers, value-store slots, and positional addresses
//! - [`error`] - Error types and the validation report
//! - [`logging`] - Tracing-based logging integration
//! - [`settings`] - Engine settings and TOML loading
//! - [`value`] - The `Value` union and per-type defaults

pub mod address;
pub mod error;
pub mod logging;
pub mod settings;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use address::{Address, FieldId, IdAllocator, SectionId, Slot};
pub use error::{FormError, FormResult, ValidationFailure, ValidationReport};
pub use settings::EngineSettings;
pub use value::{FileRef, Value, ValueKind};
