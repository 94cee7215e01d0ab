//! Value objects - Immutable objects defined by their attributes

mod notification_type;
mod recipient_field;
mod selection_state;

pub use notification_type::{ControlId, NotificationType};
pub use recipient_field::{
    escape_attribute, InputKind, RecipientField, SubmitControl, SUBMIT_CONTROL_ID,
    SUBMIT_CONTROL_NAME,
};
pub use selection_state::SelectionState;
