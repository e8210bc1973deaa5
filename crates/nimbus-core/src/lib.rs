//! NIMBUS core framework.
//!
//! Platform-agnostic site shell logic: the navigation model, the responsive
//! header controller and its scroll-lock coordination, and the header
//! rendering projection. This crate has zero platform dependencies.

// Re-exports from nimbus-types (foundation types and traits).
pub use nimbus_types::backend;
pub use nimbus_types::config;
pub use nimbus_types::error;
pub use nimbus_types::input;
pub use nimbus_types::scroll;

pub use nimbus_ui as ui;

pub mod nav;
