//! Notification types and the selector controls that choose them
//!
//! The selector container holds exactly three controls. Each control id maps
//! to one [`NotificationType`]; every other id (labels, whitespace inside the
//! container, unrelated buttons) maps to nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{RecipientField, SubmitControl};

/// How the notification reaches its recipient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// Delivered to an e-mail address
    Email,
    /// Delivered as a text message to a phone number
    Message,
    /// Delivered inside the application to a user name
    InAppNotification,
}

impl NotificationType {
    /// All notification types, in the order their controls appear on the page
    pub fn all() -> &'static [NotificationType] {
        &[
            NotificationType::Email,
            NotificationType::Message,
            NotificationType::InAppNotification,
        ]
    }

    /// Id of the selector control that activates this type
    pub fn control_id(&self) -> &'static str {
        match self {
            NotificationType::Email => "email-btn",
            NotificationType::Message => "message-btn",
            NotificationType::InAppNotification => "inapp-btn",
        }
    }

    /// Resolve a control id. Returns `None` for anything outside the three controls.
    pub fn from_control_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.control_id() == id)
    }

    /// Get a display name for the notification type
    pub fn display_name(&self) -> &'static str {
        match self {
            NotificationType::Email => "Email",
            NotificationType::Message => "Message",
            NotificationType::InAppNotification => "In-App Notification",
        }
    }

    /// Recipient input rendered into the field slot for this type
    pub fn recipient_field(&self) -> RecipientField {
        RecipientField::for_type(*self)
    }

    /// Submit control appended to the form for this type
    pub fn submit_control(&self) -> SubmitControl {
        SubmitControl::for_type(*self)
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw id of the element a click landed on inside the selector container
///
/// Kept as a string because the browser hands us whatever element was hit;
/// resolution to a [`NotificationType`] is explicit and may find nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ControlId(String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The notification type this control selects, if it is one of the three controls
    pub fn notification_type(&self) -> Option<NotificationType> {
        NotificationType::from_control_id(&self.0)
    }
}

impl From<&str> for ControlId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<NotificationType> for ControlId {
    fn from(kind: NotificationType) -> Self {
        Self::new(kind.control_id())
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
