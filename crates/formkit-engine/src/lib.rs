//! # formkit-engine
//!
//! The runtime half of the formkit engine: live value state, point-in-time
//! snapshots, conditional visibility, submit-time validation, and the
//! [`FormController`](controller::FormController) composition root that
//! wires them to a [`FormModel`](formkit_model::FormModel).

pub mod controller;
pub mod snapshot;
pub mod validation;
pub mod values;
pub mod visibility;

pub use controller::FormController;
pub use snapshot::FormSnapshot;
pub use validation::{Rule, SchemaRule, ValidationEngine};
pub use values::ValueStore;
pub use visibility::{Condition, SignalEquals, VisibilityEngine, SHOW_SIGNAL};
