//! Field Selector - swaps the recipient input and submit control on selection
//!
//! Every click inside the selector container ends up in
//! [`FieldSelector::handle_selection`]. The field slot and the submit control
//! are cleared before the control id is even looked at, so a click on a label
//! or on whitespace inside the container leaves the form with no recipient
//! input and no submit control.

use notifier_domain::{ControlId, NotificationType, SelectionState};

use crate::ports::outbound::{FormSurfacePort, SurfaceError};

/// Field selector service
pub struct FieldSelector<S> {
    surface: S,
    state: SelectionState,
}

impl<S: FormSurfacePort> FieldSelector<S> {
    /// Wrap an already-resolved surface. Starts in [`SelectionState::NoFieldRendered`].
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: SelectionState::NoFieldRendered,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// React to activation of the element with `control_id`.
    ///
    /// Unknown ids are not an error: the clears still happen and nothing is
    /// rendered.
    pub fn handle_selection(&mut self, control_id: &str) -> Result<SelectionState, SurfaceError> {
        let control = ControlId::from(control_id);

        self.clear()?;

        let selected = control.notification_type();
        match selected {
            Some(kind) => self.render(kind)?,
            None => {
                tracing::debug!(control_id = %control, "Ignoring click outside selector controls");
            }
        }

        self.state = SelectionState::after_selection(selected);
        Ok(self.state)
    }

    /// Select a notification type directly, without going through a control id
    pub fn select(&mut self, kind: NotificationType) -> Result<SelectionState, SurfaceError> {
        self.clear()?;
        self.render(kind)?;

        self.state = SelectionState::after_selection(Some(kind));
        Ok(self.state)
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.surface.clear_field_slot()?;
        self.state = SelectionState::after_selection(None);

        if self.surface.remove_submit_control()? {
            tracing::trace!("Removed previous submit control");
        }
        Ok(())
    }

    /// Render the field and its submit control as a pair. A field without a
    /// submit control is never left behind.
    fn render(&mut self, kind: NotificationType) -> Result<(), SurfaceError> {
        let field = kind.recipient_field();
        let submit = kind.submit_control();

        self.surface.render_recipient_field(&field)?;
        if let Err(e) = self.surface.append_submit_control(&submit) {
            if let Err(rollback) = self.surface.clear_field_slot() {
                tracing::warn!(error = %rollback, "Failed to roll back recipient field");
            }
            return Err(e);
        }

        tracing::debug!(
            notification_type = %kind,
            field = %field.name,
            submit_label = %submit.label,
            "Rendered recipient field"
        );
        Ok(())
    }
}
