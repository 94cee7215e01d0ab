//! Notifier Player crate.
//!
//! Binds the notification-type field selector to a page. The selector logic
//! lives in [`application::FieldSelector`] and only talks to the page through
//! [`ports::outbound::FormSurfacePort`]; the concrete surface is selected at
//! compile time (web-sys DOM on `wasm32`, in-memory elsewhere).

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::FieldSelector;
pub use infrastructure::config::SelectorConfig;
pub use infrastructure::dom::{BindError, MemoryFormSurface};
pub use ports::outbound::{FormSurfacePort, SurfaceError};
