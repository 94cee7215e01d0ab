//! Application layer - the field selector service

pub mod field_selector;

pub use field_selector::FieldSelector;
