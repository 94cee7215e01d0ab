//! Recipient input and submit control descriptors
//!
//! These are the only two elements the selector ever creates. The names and
//! ids are the contract with whatever consumes the submitted form: the
//! recipient arrives as `recpmail` / `recpnum` / `recpname`, and the submit
//! label arrives as the `action` field. Nothing on this side reads them back.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::NotificationType;

/// Id of the submit control appended to the form
pub const SUBMIT_CONTROL_ID: &str = "submit";

/// Form field name carried by the submit control
pub const SUBMIT_CONTROL_NAME: &str = "action";

/// `type` attribute of a recipient input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Email,
    Text,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Text => "text",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The recipient input rendered into the field slot
///
/// The element's `id` and `name` are always the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientField {
    pub notification_type: NotificationType,
    pub input_kind: InputKind,
    pub name: String,
    pub placeholder: String,
}

impl RecipientField {
    pub fn for_type(notification_type: NotificationType) -> Self {
        let (input_kind, name, placeholder) = match notification_type {
            NotificationType::Email => (InputKind::Email, "recpmail", "Recipient E-Mail"),
            NotificationType::Message => (
                InputKind::Text,
                "recpnum",
                "Recipient Phone Number (add countrycode)",
            ),
            NotificationType::InAppNotification => {
                (InputKind::Text, "recpname", "Recipient User Name")
            }
        };

        Self {
            notification_type,
            input_kind,
            name: name.to_string(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.name
    }

    /// Markup for the field slot's inner HTML
    pub fn to_html(&self) -> String {
        format!(
            r#"<input type="{}" name="{}" id="{}" placeholder="{}">"#,
            self.input_kind,
            escape_attribute(&self.name),
            escape_attribute(self.id()),
            escape_attribute(&self.placeholder),
        )
    }
}

/// The submit control appended to the form after a valid selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitControl {
    pub notification_type: NotificationType,
    pub label: String,
}

impl SubmitControl {
    pub fn for_type(notification_type: NotificationType) -> Self {
        let label = match notification_type {
            NotificationType::Email => "Submit Email",
            NotificationType::Message => "Submit Message",
            NotificationType::InAppNotification => "Submit Notification",
        };

        Self {
            notification_type,
            label: label.to_string(),
        }
    }

    pub fn id(&self) -> &'static str {
        SUBMIT_CONTROL_ID
    }

    pub fn name(&self) -> &'static str {
        SUBMIT_CONTROL_NAME
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<input type="submit" name="{}" id="{}" value="{}">"#,
            self.name(),
            self.id(),
            escape_attribute(&self.label),
        )
    }
}

/// Escape a string for use inside a double-quoted HTML attribute value
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_field() {
        let field = RecipientField::for_type(NotificationType::Email);
        assert_eq!(field.input_kind, InputKind::Email);
        assert_eq!(field.name, "recpmail");
        assert_eq!(field.id(), "recpmail");
        assert_eq!(field.placeholder, "Recipient E-Mail");
    }

    #[test]
    fn test_message_field_is_text() {
        let field = RecipientField::for_type(NotificationType::Message);
        assert_eq!(field.input_kind, InputKind::Text);
        assert_eq!(field.name, "recpnum");
        assert_eq!(
            field.placeholder,
            "Recipient Phone Number (add countrycode)"
        );
    }

    #[test]
    fn test_in_app_field_is_text() {
        let field = RecipientField::for_type(NotificationType::InAppNotification);
        assert_eq!(field.input_kind, InputKind::Text);
        assert_eq!(field.name, "recpname");
    }

    #[test]
    fn test_submit_labels() {
        assert_eq!(
            SubmitControl::for_type(NotificationType::Email).label,
            "Submit Email"
        );
        assert_eq!(
            SubmitControl::for_type(NotificationType::Message).label,
            "Submit Message"
        );
        assert_eq!(
            SubmitControl::for_type(NotificationType::InAppNotification).label,
            "Submit Notification"
        );
    }

    #[test]
    fn test_field_markup() {
        let html = NotificationType::Email.recipient_field().to_html();
        assert_eq!(
            html,
            r#"<input type="email" name="recpmail" id="recpmail" placeholder="Recipient E-Mail">"#
        );
    }

    #[test]
    fn test_submit_markup() {
        let html = NotificationType::Message.submit_control().to_html();
        assert_eq!(
            html,
            r#"<input type="submit" name="action" id="submit" value="Submit Message">"#
        );
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"a "quoted" <b> & 'c'"#),
            "a &quot;quoted&quot; &lt;b&gt; &amp; &#39;c&#39;"
        );
        assert_eq!(escape_attribute("plain"), "plain");
    }
}
