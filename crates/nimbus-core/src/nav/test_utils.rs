//! Shared test utilities for navigation tests.
//!
//! Provides a [`RecordingLock`] scroll-lock fake with an observable probe,
//! and a [`MockBackend`] that records draw calls for header assertions.

use std::cell::RefCell;
use std::rc::Rc;

use nimbus_types::backend::{Color, RenderBackend};
use nimbus_types::bitmap_font;
use nimbus_types::error::Result;
use nimbus_types::scroll::ScrollLock;

/// Observable state of a [`RecordingLock`].
#[derive(Debug, Default)]
pub struct LockProbe {
    /// Whether the lock is currently held.
    pub held: bool,
    /// Total acquire calls.
    pub acquires: u32,
    /// Total release calls.
    pub releases: u32,
}

/// A scroll-lock fake that records every operation.
///
/// The probe stays observable after the lock has been boxed into a
/// controller, so tests can assert the 1:1 acquire/release pairing.
pub struct RecordingLock {
    probe: Rc<RefCell<LockProbe>>,
}

impl RecordingLock {
    pub fn new() -> (Self, Rc<RefCell<LockProbe>>) {
        let probe = Rc::new(RefCell::new(LockProbe::default()));
        (
            Self {
                probe: Rc::clone(&probe),
            },
            probe,
        )
    }
}

impl ScrollLock for RecordingLock {
    fn acquire(&mut self) {
        let mut p = self.probe.borrow_mut();
        p.held = true;
        p.acquires += 1;
    }

    fn release(&mut self) {
        let mut p = self.probe.borrow_mut();
        p.held = false;
        p.releases += 1;
    }
}

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
}

/// A mock backend that records draw calls for test assertions.
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    pub fn draw_text_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::DrawText { .. }))
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
}
