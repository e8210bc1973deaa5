//! Shared test utilities for nimbus-ui widget tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion.

use nimbus_types::backend::{Color, RenderBackend};
use nimbus_types::bitmap_font;
use nimbus_types::error::Result;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum DrawCall {
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    },
    GradientV {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        top: Color,
        bottom: Color,
    },
}

/// A mock backend that records all draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Count of `DrawText` calls.
    pub fn draw_text_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::DrawText { .. }))
            .count()
    }

    /// Count of `Line` calls.
    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count()
    }

    /// Count of `GradientV` calls.
    pub fn gradient_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::GradientV { .. }))
            .count()
    }

    /// Check if any `DrawText` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.calls.iter().any(|c| {
            if let DrawCall::DrawText { text, .. } = c {
                text.contains(needle)
            } else {
                false
            }
        })
    }

    /// Color of the first `DrawText` call containing the given substring.
    pub fn text_color_of(&self, needle: &str) -> Option<Color> {
        self.calls.iter().find_map(|c| {
            if let DrawCall::DrawText { text, color, .. } = c {
                text.contains(needle).then_some(*color)
            } else {
                None
            }
        })
    }

    /// Return text draw calls as `(text, x, y, font_size)` tuples,
    /// sorted by Y then X position for easy geometric analysis.
    pub fn text_positions(&self) -> Vec<(&str, i32, i32, u16)> {
        let mut positions: Vec<_> = self
            .calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::DrawText {
                    text,
                    x,
                    y,
                    font_size,
                    ..
                } = c
                {
                    Some((text.as_str(), *x, *y, *font_size))
                } else {
                    None
                }
            })
            .collect();
        positions.sort_by(|a, b| a.2.cmp(&b.2).then(a.1.cmp(&b.1)));
        positions
    }
}

impl RenderBackend for MockBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, _color: Color) -> Result<()> {
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        let scale = (font_size / bitmap_font::GLYPH_HEIGHT as u16).max(1) as u32;
        text.len() as u32 * bitmap_font::GLYPH_WIDTH as u32 * scale
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
        Ok(())
    }

    fn fill_rect_gradient_v(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        top: Color,
        bottom: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::GradientV {
            x,
            y,
            w,
            h,
            top,
            bottom,
        });
        Ok(())
    }
}
