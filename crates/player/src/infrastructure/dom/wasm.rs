//! Browser form surface using web-sys
//!
//! The three containers are resolved once in [`bind_field_selector`]; the
//! surface only holds the handles it was given.

use std::cell::RefCell;

use notifier_domain::{RecipientField, SubmitControl, SUBMIT_CONTROL_ID};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement};

use super::{dispatch_click, BindError};
use crate::application::FieldSelector;
use crate::infrastructure::config::SelectorConfig;
use crate::ports::outbound::{FormSurfacePort, SurfaceError};

fn dom_error(op: &str, err: JsValue) -> SurfaceError {
    SurfaceError::dom(format!("{}: {:?}", op, err))
}

/// Form surface over live DOM elements
pub struct DomFormSurface {
    document: Document,
    field_slot: Element,
    form: Element,
}

impl DomFormSurface {
    pub fn new(document: Document, field_slot: Element, form: Element) -> Self {
        Self {
            document,
            field_slot,
            form,
        }
    }
}

impl FormSurfacePort for DomFormSurface {
    fn clear_field_slot(&mut self) -> Result<(), SurfaceError> {
        self.field_slot.set_inner_html("");
        Ok(())
    }

    fn remove_submit_control(&mut self) -> Result<bool, SurfaceError> {
        // Looked up document-wide: the submit id is unique on the page.
        match self.document.get_element_by_id(SUBMIT_CONTROL_ID) {
            Some(existing) => {
                existing.remove();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn render_recipient_field(&mut self, field: &RecipientField) -> Result<(), SurfaceError> {
        let input = self
            .document
            .create_element("input")
            .map_err(|e| dom_error("create recipient input", e))?;

        for (name, value) in [
            ("type", field.input_kind.as_str()),
            ("name", field.name.as_str()),
            ("id", field.id()),
            ("placeholder", field.placeholder.as_str()),
        ] {
            input
                .set_attribute(name, value)
                .map_err(|e| dom_error("set recipient attribute", e))?;
        }

        self.field_slot
            .append_child(&input)
            .map_err(|e| dom_error("insert recipient input", e))?;
        Ok(())
    }

    fn append_submit_control(&mut self, control: &SubmitControl) -> Result<(), SurfaceError> {
        let submit: HtmlInputElement = self
            .document
            .create_element("input")
            .map_err(|e| dom_error("create submit control", e))?
            .dyn_into()
            .map_err(|_| SurfaceError::dom("created element is not an <input>"))?;

        submit.set_type("submit");
        submit.set_name(control.name());
        submit.set_value(&control.label);
        submit.set_id(control.id());

        self.form
            .append_child(&submit)
            .map_err(|e| dom_error("append submit control", e))?;
        Ok(())
    }
}

/// A selector attached to the page
///
/// Dropping the binding detaches the click listener. Call
/// [`FieldSelectorBinding::keep_alive`] to keep it for the page lifetime.
pub struct FieldSelectorBinding {
    container: Element,
    on_click: Option<Closure<dyn FnMut(Event)>>,
}

impl FieldSelectorBinding {
    /// Leak the listener so it stays registered until the page unloads
    pub fn keep_alive(mut self) {
        if let Some(on_click) = self.on_click.take() {
            on_click.forget();
        }
    }
}

impl Drop for FieldSelectorBinding {
    fn drop(&mut self) {
        let Some(on_click) = self.on_click.as_ref() else {
            return;
        };
        if let Err(e) = self
            .container
            .remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to detach field selector listener: {:?}", e);
        }
    }
}

/// Resolve the containers named by `config` and register the click listener
pub fn bind_field_selector(config: &SelectorConfig) -> Result<FieldSelectorBinding, BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    let lookup = |id: &str| {
        document
            .get_element_by_id(id)
            .ok_or_else(|| BindError::missing_element(id))
    };
    let container = lookup(&config.type_selector_id)?;
    let field_slot = lookup(&config.field_slot_id)?;
    let form = lookup(&config.form_id)?;

    let surface = DomFormSurface::new(document.clone(), field_slot, form);
    let selector = RefCell::new(FieldSelector::new(surface));

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target_id = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.id());

        dispatch_click(&selector, target_id.as_deref());
    });

    container
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener(format!("{:?}", e)))?;

    tracing::info!(
        type_selector = %config.type_selector_id,
        field_slot = %config.field_slot_id,
        form = %config.form_id,
        "Field selector bound"
    );

    Ok(FieldSelectorBinding {
        container,
        on_click: Some(on_click),
    })
}
