//! Foundation types and traits for NIMBUS.
//!
//! This crate contains the platform-agnostic core types shared by all NIMBUS
//! crates: colors, input events, backend trait definitions, the page scroll
//! lock capability, configuration, and error types.

pub mod backend;
pub mod bitmap_font;
pub mod config;
pub mod error;
pub mod input;
pub mod scroll;
