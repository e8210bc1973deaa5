//! nimbus-ui: Widget toolkit built on `RenderBackend`.
//!
//! Layout helpers, themed drawing context, and the widgets the site shell
//! composes: buttons, decorative gradients, and the menu icon. All rendering
//! goes through `RenderBackend` trait methods -- no platform-specific code.

pub mod button;
pub mod context;
pub mod gradient;
pub mod layout;
pub mod menu_icon;
pub mod theme;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use context::DrawContext;
pub use layout::Padding;
pub use theme::Theme;
pub use widget::Widget;
