//! Infrastructure layer - External adapters

pub mod config;
pub mod dom;

pub use config::SelectorConfig;
pub use dom::{dispatch_click, BindError, ClickOutcome, MemoryElement, MemoryFormSurface};

#[cfg(target_arch = "wasm32")]
pub use dom::{bind_field_selector, DomFormSurface, FieldSelectorBinding};
