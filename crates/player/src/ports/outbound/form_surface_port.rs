//! Form Surface Port - Outbound port for the two page regions the selector owns
//!
//! The selector mutates exactly two subtrees: the field slot (which holds the
//! recipient input) and the form (which receives the submit control). Both are
//! resolved once by the composition root and handed to the adapter; the port
//! never looks anything up by itself.

use notifier_domain::{RecipientField, SubmitControl};
use thiserror::Error;

/// Failure reported by a surface adapter
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The DOM rejected an operation (element creation, attribute, insertion)
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl SurfaceError {
    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }
}

/// Form Surface Port trait
///
/// Not `Send`/`Sync`: on the browser the surface holds DOM handles and lives
/// inside a single-threaded click listener.
#[cfg_attr(test, mockall::automock)]
pub trait FormSurfacePort {
    /// Remove everything from the field slot
    fn clear_field_slot(&mut self) -> Result<(), SurfaceError>;

    /// Remove the submit control from the form. Returns whether one was present.
    fn remove_submit_control(&mut self) -> Result<bool, SurfaceError>;

    /// Render the recipient input into the (already cleared) field slot
    fn render_recipient_field(&mut self, field: &RecipientField) -> Result<(), SurfaceError>;

    /// Append a new submit control to the end of the form
    fn append_submit_control(&mut self, control: &SubmitControl) -> Result<(), SurfaceError>;
}
