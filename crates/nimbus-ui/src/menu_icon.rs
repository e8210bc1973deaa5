//! Hamburger menu icon.
//!
//! Reflects the navigation overlay state: two horizontal bars when closed,
//! a cross when open.

use crate::context::DrawContext;
use crate::widget::Widget;
use nimbus_types::error::Result;

/// Bar thickness in pixels.
const BAR_H: u32 = 2;

/// The menu toggle glyph.
pub struct MenuIcon {
    /// Whether the overlay the icon controls is open.
    pub open: bool,
}

impl MenuIcon {
    pub fn new(open: bool) -> Self {
        Self { open }
    }
}

impl Widget for MenuIcon {
    fn measure(&self, _ctx: &DrawContext<'_>, _available_w: u32, _available_h: u32) -> (u32, u32) {
        (20, 12)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let color = ctx.theme.text_primary;
        if self.open {
            // Cross: two diagonals corner to corner.
            ctx.backend
                .draw_line(x, y, x + w as i32, y + h as i32, BAR_H as u16, color)?;
            ctx.backend
                .draw_line(x, y + h as i32, x + w as i32, y, BAR_H as u16, color)?;
        } else {
            // Two bars, top and bottom.
            ctx.backend.fill_rect(x, y, w, BAR_H, color)?;
            ctx.backend
                .fill_rect(x, y + h as i32 - BAR_H as i32, w, BAR_H, color)?;
        }
        Ok(())
    }
}
