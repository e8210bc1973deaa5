//! Decorative gradient bands.
//!
//! The site decorates sections with soft vertical gradients. A band fades
//! between two stops; `glow` builds the accent-to-background fade used
//! behind the hero area.

use crate::context::DrawContext;
use crate::widget::Widget;
use nimbus_types::backend::Color;
use nimbus_types::error::Result;

/// A vertical two-stop gradient fill.
pub struct GradientBand {
    /// Color at the top edge.
    pub top: Color,
    /// Color at the bottom edge.
    pub bottom: Color,
}

impl GradientBand {
    pub fn new(top: Color, bottom: Color) -> Self {
        Self { top, bottom }
    }

    /// Accent glow fading into the page background.
    pub fn glow(ctx: &DrawContext<'_>) -> Self {
        Self {
            top: ctx.theme.accent.with_alpha(96),
            bottom: ctx.theme.background,
        }
    }
}

impl Widget for GradientBand {
    fn measure(&self, _ctx: &DrawContext<'_>, available_w: u32, available_h: u32) -> (u32, u32) {
        (available_w, available_h)
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        ctx.backend
            .fill_rect_gradient_v(x, y, w, h, self.top, self.bottom)
    }
}
