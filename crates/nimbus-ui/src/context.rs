//! Theme-aware drawing context.
//!
//! All nimbus-ui widgets render through `DrawContext`, which wraps a
//! `&mut dyn RenderBackend` and provides access to the active theme.

use crate::theme::Theme;
use nimbus_types::backend::{Color, RenderBackend};
use nimbus_types::error::Result;

/// Drawing context wrapping a backend and theme.
pub struct DrawContext<'a> {
    pub backend: &'a mut dyn RenderBackend,
    pub theme: &'a Theme,
}

impl<'a> DrawContext<'a> {
    pub fn new(backend: &'a mut dyn RenderBackend, theme: &'a Theme) -> Self {
        Self { backend, theme }
    }

    /// Draw a themed label with default font size and primary text color.
    pub fn label(&mut self, text: &str, x: i32, y: i32) -> Result<()> {
        self.backend
            .draw_text(text, x, y, self.theme.font_size_md, self.theme.text_primary)
    }

    /// Draw a themed label with a specific style.
    pub fn label_styled(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.backend.draw_text(text, x, y, font_size, color)
    }

    /// Draw a horizontal divider line.
    pub fn divider_h(&mut self, x: i32, y: i32, w: u32) -> Result<()> {
        self.backend
            .draw_line(x, y, x + w as i32, y, 1, self.theme.border_subtle)
    }

    /// Measure text width using theme default font size.
    pub fn measure_text(&self, text: &str) -> u32 {
        self.backend.measure_text(text, self.theme.font_size_md)
    }

    /// Measure text extents with a specific font size.
    pub fn measure_text_sized(&self, text: &str, font_size: u16) -> (u32, u32) {
        self.backend.measure_text_extents(text, font_size)
    }
}
