//! # formkit
//!
//! A dynamic form schema and validation engine. Forms are assembled at
//! runtime from typed fields and grouped sections; each field's validation
//! and value semantics derive from its declared type, and the live value
//! state serializes into a positional submission payload.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. Depend on `formkit` for the whole engine, or on the individual
//! crates for finer-grained control.
//!
//! ```
//! use formkit::engine::FormController;
//! use formkit::model::FieldType;
//! use formkit::core::Value;
//!
//! let mut form = FormController::new();
//! let name = form.add_field(FieldType::Text);
//! form.set_value(name, Value::from("Ada")).unwrap();
//! form.set_named("requiredField", Value::from("yes"));
//!
//! let payload = form.submit().unwrap();
//! assert_eq!(payload.to_json()["field-0"], "Ada");
//! ```

/// Core types: values, addressing, errors, settings, logging.
pub use formkit_core as core;

/// Synchronous signal dispatcher and typed form events.
pub use formkit_signals as signals;

/// The field type catalog and the mutable form tree.
pub use formkit_model as model;

/// Value store, snapshots, visibility, validation, and the controller.
pub use formkit_engine as engine;

// Third-party re-exports for user convenience
pub use chrono;
pub use serde_json;
pub use tracing;
