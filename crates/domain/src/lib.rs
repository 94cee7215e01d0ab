//! Notifier Domain - value objects for the notification-type field selector.
//!
//! Nothing in this crate touches the DOM. The player crate maps these
//! descriptors onto a concrete surface (web-sys on the browser, an in-memory
//! tree elsewhere).

pub mod value_objects;

pub use value_objects::{
    escape_attribute, ControlId, InputKind, NotificationType, RecipientField, SelectionState,
    SubmitControl, SUBMIT_CONTROL_ID, SUBMIT_CONTROL_NAME,
};
