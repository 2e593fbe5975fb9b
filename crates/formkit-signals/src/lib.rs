//! # formkit-signals
//!
//! Synchronous signal dispatcher for the formkit engine. A rendering layer
//! connects receivers to the events it cares about; the controller sends an
//! event after each mutation commits, and the receiver re-reads the live
//! snapshot. Dispatch runs on the calling thread in connection order, so
//! every mutation is observable by the very next read.
//!
//! ## Usage
//!
//! ```
//! use formkit_signals::{Signal, ValueChanged};
//! use formkit_core::Slot;
//! use std::sync::Arc;
//!
//! let signal: Signal<ValueChanged> = Signal::new();
//!
//! signal.connect("renderer", Arc::new(|event: &ValueChanged| {
//!     println!("slot changed: {:?}", event.slot);
//! }));
//!
//! signal.send(&ValueChanged { slot: Slot::named("requiredField") });
//! ```

use std::sync::{Arc, RwLock};

use formkit_core::{FieldId, SectionId, Slot};

/// The type signature for a signal receiver callback.
///
/// Receivers must be `Send + Sync` so a signal can be shared across threads,
/// even though dispatch itself is synchronous.
pub type SignalReceiver<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A signal that can be connected to and dispatched.
///
/// Each signal carries a payload type `T`. Receivers are called in the order
/// they were connected.
pub struct Signal<T: 'static> {
    receivers: RwLock<Vec<(String, SignalReceiver<T>)>>,
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Signal<T> {
    /// Creates a new signal with no connected receivers.
    pub fn new() -> Self {
        Self {
            receivers: RwLock::new(Vec::new()),
        }
    }

    /// Connects a receiver to this signal.
    ///
    /// The `receiver_id` identifies the receiver for later disconnection.
    /// If a receiver with the same ID is already connected, it is replaced.
    pub fn connect(&self, receiver_id: impl Into<String>, callback: SignalReceiver<T>) {
        let id = receiver_id.into();
        let mut receivers = self.receivers.write().expect("signal lock poisoned");

        if let Some(entry) = receivers.iter_mut().find(|(rid, _)| *rid == id) {
            entry.1 = callback;
        } else {
            receivers.push((id, callback));
        }
    }

    /// Disconnects the receiver with the given ID.
    ///
    /// Returns `true` if a receiver was found and removed.
    pub fn disconnect(&self, receiver_id: &str) -> bool {
        let mut receivers = self.receivers.write().expect("signal lock poisoned");
        let len_before = receivers.len();
        receivers.retain(|(id, _)| id != receiver_id);
        receivers.len() < len_before
    }

    /// Sends the signal to all connected receivers, in connection order.
    pub fn send(&self, payload: &T) {
        let receivers = self.receivers.read().expect("signal lock poisoned");
        for (_, callback) in receivers.iter() {
            callback(payload);
        }
    }

    /// Returns the number of connected receivers.
    pub fn receiver_count(&self) -> usize {
        self.receivers.read().expect("signal lock poisoned").len()
    }
}

// ── Event payloads ───────────────────────────────────────────────────

/// Sent after a top-level field is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAdded {
    /// The new field's identity.
    pub field: FieldId,
}

/// Sent after a section is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionAdded {
    /// The new section's identity.
    pub section: SectionId,
}

/// Sent after a field is appended to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedFieldAdded {
    /// The owning section.
    pub section: SectionId,
    /// The new field's identity.
    pub field: FieldId,
}

/// Sent after a field is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRemoved {
    /// The removed field's identity.
    pub field: FieldId,
}

/// Sent after a section (and its nested fields) is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRemoved {
    /// The removed section's identity.
    pub section: SectionId,
}

/// Sent after a field's option list is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsChanged {
    /// The field whose options changed.
    pub field: FieldId,
}

/// Sent after a field's visibility flag changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChanged {
    /// The field whose visibility changed.
    pub field: FieldId,
    /// The new visibility.
    pub visible: bool,
}

/// Sent after a value-store slot is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChanged {
    /// The slot that was written.
    pub slot: Slot,
}

/// Sent after a submission passes validation and its payload is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSubmitted {
    /// Number of entries in the committed payload.
    pub entries: usize,
}

/// The bundle of signals one form controller emits through.
///
/// Connect to the individual signals; the controller sends each event
/// after the corresponding mutation has committed.
#[derive(Default)]
pub struct FormSignals {
    /// Fired after `add_field`.
    pub field_added: Signal<FieldAdded>,
    /// Fired after `add_section`.
    pub section_added: Signal<SectionAdded>,
    /// Fired after `add_nested_field`.
    pub nested_field_added: Signal<NestedFieldAdded>,
    /// Fired after `remove_field`.
    pub field_removed: Signal<FieldRemoved>,
    /// Fired after `remove_section`.
    pub section_removed: Signal<SectionRemoved>,
    /// Fired after `update_field_options`.
    pub options_changed: Signal<OptionsChanged>,
    /// Fired after a visibility flag changes.
    pub visibility_changed: Signal<VisibilityChanged>,
    /// Fired after a value edit.
    pub value_changed: Signal<ValueChanged>,
    /// Fired after a successful submit.
    pub form_submitted: Signal<FormSubmitted>,
}

impl FormSignals {
    /// Creates a bundle with no connected receivers.
    pub fn new() -> Self {
        Self::default()
    }
}
