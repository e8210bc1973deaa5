//! Button widget.

use crate::context::DrawContext;
use crate::layout::{self, Padding};
use crate::widget::Widget;
use nimbus_types::backend::Color;
use nimbus_types::error::Result;

/// Button visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Default state.
    Normal,
    /// Pointer is over the button.
    Hover,
    /// Button is being pressed.
    Pressed,
}

/// Button visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled button with accent color.
    Primary,
    /// Text-only button; background appears on hover.
    Ghost,
}

/// A clickable button with a text label.
pub struct Button {
    /// Button text label.
    pub label: String,
    /// Current visual state.
    pub state: ButtonState,
    /// Visual style variant.
    pub style: ButtonStyle,
    /// Internal padding around the label.
    pub padding: Padding,
}

impl Button {
    /// Create a new ghost button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: ButtonState::Normal,
            style: ButtonStyle::Ghost,
            padding: Padding::symmetric(12, 6),
        }
    }

    /// Create a new primary (accent-colored) button.
    pub fn primary(label: impl Into<String>) -> Self {
        Self {
            style: ButtonStyle::Primary,
            ..Self::new(label)
        }
    }

    fn bg_color(&self, theme: &crate::theme::Theme) -> Option<Color> {
        match self.style {
            ButtonStyle::Primary => Some(match self.state {
                ButtonState::Pressed => theme.accent_pressed,
                ButtonState::Hover => theme.accent_hover,
                ButtonState::Normal => theme.accent,
            }),
            ButtonStyle::Ghost => match self.state {
                ButtonState::Hover => Some(theme.button_bg_hover),
                ButtonState::Pressed => Some(theme.button_bg_pressed),
                ButtonState::Normal => None,
            },
        }
    }

    fn text_color(&self, theme: &crate::theme::Theme) -> Color {
        match self.style {
            ButtonStyle::Primary => theme.text_on_accent,
            ButtonStyle::Ghost => {
                if self.state == ButtonState::Normal {
                    theme.text_secondary
                } else {
                    theme.text_primary
                }
            },
        }
    }
}

impl Widget for Button {
    fn measure(&self, ctx: &DrawContext<'_>, _available_w: u32, _available_h: u32) -> (u32, u32) {
        let text_w = ctx
            .backend
            .measure_text(&self.label, ctx.theme.font_size_md);
        let text_h = ctx.backend.measure_text_height(ctx.theme.font_size_md);
        (
            text_w + self.padding.horizontal(),
            text_h + self.padding.vertical(),
        )
    }

    fn draw(&self, ctx: &mut DrawContext<'_>, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let radius = ctx.theme.border_radius_md;

        if let Some(bg) = self.bg_color(ctx.theme) {
            ctx.backend.fill_rounded_rect(x, y, w, h, radius, bg)?;
        }

        let text_w = ctx
            .backend
            .measure_text(&self.label, ctx.theme.font_size_md);
        let text_h = ctx.backend.measure_text_height(ctx.theme.font_size_md);
        let tx = x + layout::center(w, text_w);
        let ty = y + layout::center(h, text_h);
        let color = self.text_color(ctx.theme);
        ctx.backend
            .draw_text(&self.label, tx, ty, ctx.theme.font_size_md, color)?;

        Ok(())
    }
}
