//! In-memory form surface
//!
//! Models the field slot and the form as flat lists of elements. Nothing here
//! parses HTML; elements are built from the domain descriptors and rendered
//! back to markup on demand.

use notifier_domain::{escape_attribute, RecipientField, SubmitControl, SUBMIT_CONTROL_ID};

use crate::infrastructure::config::SelectorConfig;
use crate::ports::outbound::{FormSurfacePort, SurfaceError};

const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// A single element with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    tag: String,
    attributes: Vec<(String, String)>,
}

impl MemoryElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute, replacing any previous value in place
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            html.push_str(&format!(r#" {}="{}""#, name, escape_attribute(value)));
        }
        html.push('>');
        if !VOID_ELEMENTS.contains(&self.tag.as_str()) {
            html.push_str(&format!("</{}>", self.tag));
        }
        html
    }
}

impl From<&RecipientField> for MemoryElement {
    fn from(field: &RecipientField) -> Self {
        MemoryElement::new("input")
            .with_attribute("type", field.input_kind.as_str())
            .with_attribute("name", field.name.as_str())
            .with_attribute("id", field.id())
            .with_attribute("placeholder", field.placeholder.as_str())
    }
}

impl From<&SubmitControl> for MemoryElement {
    fn from(control: &SubmitControl) -> Self {
        MemoryElement::new("input")
            .with_attribute("type", "submit")
            .with_attribute("name", control.name())
            .with_attribute("id", control.id())
            .with_attribute("value", control.label.as_str())
    }
}

/// Form surface backed by plain vectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFormSurface {
    field_slot: Vec<MemoryElement>,
    form: Vec<MemoryElement>,
}

impl MemoryFormSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a form that already has children (the selector container,
    /// a message body, ...). The submit control is appended after them.
    pub fn with_form_children(children: Vec<MemoryElement>) -> Self {
        Self {
            field_slot: Vec::new(),
            form: children,
        }
    }

    pub fn field_slot(&self) -> &[MemoryElement] {
        &self.field_slot
    }

    pub fn form_children(&self) -> &[MemoryElement] {
        &self.form
    }

    pub fn submit_control(&self) -> Option<&MemoryElement> {
        self.form
            .iter()
            .find(|el| el.id() == Some(SUBMIT_CONTROL_ID))
    }

    pub fn submit_control_count(&self) -> usize {
        self.form
            .iter()
            .filter(|el| el.id() == Some(SUBMIT_CONTROL_ID))
            .count()
    }

    pub fn field_slot_html(&self) -> String {
        self.field_slot.iter().map(MemoryElement::to_html).collect()
    }

    pub fn form_html(&self) -> String {
        self.form.iter().map(MemoryElement::to_html).collect()
    }

    /// Both regions wrapped in their containers, one per line
    pub fn document_html(&self, config: &SelectorConfig) -> String {
        format!(
            "<div id=\"{}\">{}</div>\n<form id=\"{}\">{}</form>",
            escape_attribute(&config.field_slot_id),
            self.field_slot_html(),
            escape_attribute(&config.form_id),
            self.form_html(),
        )
    }
}

impl FormSurfacePort for MemoryFormSurface {
    fn clear_field_slot(&mut self) -> Result<(), SurfaceError> {
        self.field_slot.clear();
        Ok(())
    }

    fn remove_submit_control(&mut self) -> Result<bool, SurfaceError> {
        match self
            .form
            .iter()
            .position(|el| el.id() == Some(SUBMIT_CONTROL_ID))
        {
            Some(index) => {
                self.form.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn render_recipient_field(&mut self, field: &RecipientField) -> Result<(), SurfaceError> {
        self.field_slot = vec![MemoryElement::from(field)];
        Ok(())
    }

    fn append_submit_control(&mut self, control: &SubmitControl) -> Result<(), SurfaceError> {
        self.form.push(MemoryElement::from(control));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifier_domain::NotificationType;

    #[test]
    fn test_element_markup_matches_descriptor_markup() {
        for kind in NotificationType::all() {
            let field = kind.recipient_field();
            assert_eq!(MemoryElement::from(&field).to_html(), field.to_html());

            let submit = kind.submit_control();
            assert_eq!(MemoryElement::from(&submit).to_html(), submit.to_html());
        }
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut el = MemoryElement::new("input")
            .with_attribute("type", "text")
            .with_attribute("name", "a");
        el.set_attribute("type", "email");
        assert_eq!(el.to_html(), r#"<input type="email" name="a">"#);
    }

    #[test]
    fn test_non_void_elements_are_closed() {
        let el = MemoryElement::new("textarea").with_attribute("name", "body");
        assert_eq!(el.to_html(), r#"<textarea name="body"></textarea>"#);
    }

    #[test]
    fn test_remove_submit_control_reports_presence() {
        let mut surface = MemoryFormSurface::new();
        assert_eq!(surface.remove_submit_control(), Ok(false));

        let submit = NotificationType::Email.submit_control();
        surface
            .append_submit_control(&submit)
            .expect("append submit");
        assert_eq!(surface.remove_submit_control(), Ok(true));
        assert_eq!(surface.submit_control_count(), 0);
    }

    #[test]
    fn test_document_html_uses_configured_ids() {
        let mut surface = MemoryFormSurface::new();
        let kind = NotificationType::InAppNotification;
        surface
            .render_recipient_field(&kind.recipient_field())
            .expect("render field");
        surface
            .append_submit_control(&kind.submit_control())
            .expect("append submit");

        let html = surface.document_html(&SelectorConfig::default());
        assert_eq!(
            html,
            concat!(
                r#"<div id="add-field"><input type="text" name="recpname" id="recpname" placeholder="Recipient User Name"></div>"#,
                "\n",
                r#"<form id="form"><input type="submit" name="action" id="submit" value="Submit Notification"></form>"#,
            )
        );
    }
}
