//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the field selector to mutate the page without depending on a
//! concrete DOM implementation.

pub mod form_surface_port;

pub use form_surface_port::{FormSurfacePort, SurfaceError};

#[cfg(test)]
pub use form_surface_port::MockFormSurfacePort;
