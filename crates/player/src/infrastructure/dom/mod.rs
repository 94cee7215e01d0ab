//! Surface adapters for [`FormSurfacePort`](crate::ports::outbound::FormSurfacePort)
//!
//! The browser adapter is selected at compile time based on the target
//! architecture. The in-memory surface is available everywhere; the native
//! preview binary and the tests run against it.

mod memory;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use memory::{MemoryElement, MemoryFormSurface};

#[cfg(target_arch = "wasm32")]
pub use wasm::{bind_field_selector, DomFormSurface, FieldSelectorBinding};

use std::cell::RefCell;

use notifier_domain::SelectionState;
use thiserror::Error;

use crate::application::FieldSelector;
use crate::ports::outbound::{FormSurfacePort, SurfaceError};

/// Failure while attaching the selector to the page
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("No global window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    /// One of the three containers is not on the page
    #[error("Required element #{id} not found")]
    MissingElement { id: String },

    #[error("Failed to register click listener: {0}")]
    Listener(String),
}

impl BindError {
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}

/// What happened to a single click routed to the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Handled(SelectionState),
    Failed(SurfaceError),
    /// The selector was already borrowed; the click was dropped
    Busy,
}

/// Route a click to the selector.
///
/// `target_id` is the id of the element the click landed on, or `None` when
/// the target is not an element. Targets without an id select nothing.
pub fn dispatch_click<S: FormSurfacePort>(
    selector: &RefCell<FieldSelector<S>>,
    target_id: Option<&str>,
) -> ClickOutcome {
    let control_id = target_id.unwrap_or_default();

    let Ok(mut selector) = selector.try_borrow_mut() else {
        tracing::warn!(control_id = %control_id, "Field selector busy, dropping click");
        return ClickOutcome::Busy;
    };

    match selector.handle_selection(control_id) {
        Ok(state) => ClickOutcome::Handled(state),
        Err(e) => {
            tracing::warn!(control_id = %control_id, "Field selection failed: {}", e);
            ClickOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifier_domain::NotificationType;

    fn memory_selector() -> RefCell<FieldSelector<MemoryFormSurface>> {
        RefCell::new(FieldSelector::new(MemoryFormSurface::new()))
    }

    #[test]
    fn test_dispatch_click_on_control() {
        let selector = memory_selector();
        assert_eq!(
            dispatch_click(&selector, Some("message-btn")),
            ClickOutcome::Handled(SelectionState::FieldRendered(NotificationType::Message))
        );
        assert_eq!(selector.borrow().surface().submit_control_count(), 1);
    }

    #[test]
    fn test_dispatch_click_without_element_target_clears() {
        let selector = memory_selector();
        dispatch_click(&selector, Some("email-btn"));

        assert_eq!(
            dispatch_click(&selector, None),
            ClickOutcome::Handled(SelectionState::NoFieldRendered)
        );
        assert!(selector.borrow().surface().field_slot().is_empty());
        assert_eq!(selector.borrow().surface().submit_control_count(), 0);
    }

    #[test]
    fn test_dispatch_click_on_element_without_id_clears() {
        let selector = memory_selector();
        dispatch_click(&selector, Some("inapp-btn"));

        assert_eq!(
            dispatch_click(&selector, Some("")),
            ClickOutcome::Handled(SelectionState::NoFieldRendered)
        );
    }

    #[test]
    fn test_dispatch_click_while_borrowed_is_dropped() {
        let selector = memory_selector();
        dispatch_click(&selector, Some("email-btn"));

        let held = selector.borrow();
        assert_eq!(dispatch_click(&selector, Some("message-btn")), ClickOutcome::Busy);
        assert_eq!(
            held.state(),
            SelectionState::FieldRendered(NotificationType::Email)
        );
    }

    #[test]
    fn test_missing_element_names_the_id() {
        assert_eq!(
            BindError::missing_element("add-field").to_string(),
            "Required element #add-field not found"
        );
    }
}
