//! What the field slot currently shows

use serde::{Deserialize, Serialize};

use crate::value_objects::NotificationType;

/// State of the field selector
///
/// Transitions happen on every click inside the selector container:
/// a recognized control moves to `FieldRendered(kind)` from any state, and
/// anything else moves to `NoFieldRendered` because the slot and the submit
/// control are cleared before the control id is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "notification_type", rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    NoFieldRendered,
    FieldRendered(NotificationType),
}

impl SelectionState {
    pub fn after_selection(selected: Option<NotificationType>) -> Self {
        match selected {
            Some(kind) => SelectionState::FieldRendered(kind),
            None => SelectionState::NoFieldRendered,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, SelectionState::FieldRendered(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_has_no_field() {
        assert_eq!(SelectionState::default(), SelectionState::NoFieldRendered);
        assert!(!SelectionState::default().is_rendered());
    }

    #[test]
    fn test_after_selection() {
        assert_eq!(
            SelectionState::after_selection(Some(NotificationType::Message)),
            SelectionState::FieldRendered(NotificationType::Message)
        );
        assert_eq!(
            SelectionState::after_selection(None),
            SelectionState::NoFieldRendered
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(SelectionState::FieldRendered(NotificationType::Email))
            .expect("serialize state");
        assert_eq!(
            json,
            serde_json::json!({ "state": "field_rendered", "notification_type": "email" })
        );

        let json = serde_json::to_value(SelectionState::NoFieldRendered).expect("serialize state");
        assert_eq!(json, serde_json::json!({ "state": "no_field_rendered" }));
    }
}
