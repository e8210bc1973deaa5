//! Frame composition.
//!
//! Page content scrolls; the header is fixed on top. Content is a hero
//! glow plus one placeholder section per desktop navigation entry, so the
//! section jump keys and the active highlight have something to land on.

use nimbus_core::nav::model::NavModel;
use nimbus_types::backend::RenderBackend;
use nimbus_types::error::Result;
use nimbus_ui::gradient::GradientBand;
use nimbus_ui::{DrawContext, Widget};

use crate::app_state::AppState;

/// Hero glow height.
const HERO_H: u32 = 320;
/// Vertical space per placeholder section.
const SECTION_H: i32 = 480;
/// Content left margin.
const MARGIN_X: i32 = 40;

/// Maximum scroll offset for the generated page.
pub fn page_max_scroll(model: &NavModel, screen_h: u32) -> i32 {
    let sections = model.entries().iter().filter(|e| !e.only_mobile).count() as i32;
    (HERO_H as i32 + sections * SECTION_H).saturating_sub(screen_h as i32).max(0)
}

/// Draw one frame.
pub fn draw_frame(state: &AppState, backend: &mut dyn RenderBackend) -> Result<()> {
    backend.clear(state.theme.background)?;
    let offset = state.scroll.borrow().offset();
    let bar_h = state.header.bar_height() as i32;
    {
        let mut ctx = DrawContext::new(backend, &state.theme);

        // Hero glow at the top of the page content.
        let glow = GradientBand::glow(&ctx);
        glow.draw(&mut ctx, 0, bar_h - offset, state.screen_w, HERO_H)?;

        // Placeholder sections, one per desktop entry.
        let sections = state
            .nav
            .model()
            .entries()
            .iter()
            .filter(|e| !e.only_mobile);
        for (i, entry) in sections.enumerate() {
            let y = bar_h + HERO_H as i32 + i as i32 * SECTION_H - offset;
            if y >= state.screen_h as i32 || y < bar_h - SECTION_H {
                continue;
            }
            ctx.label_styled(
                &entry.title,
                MARGIN_X,
                y,
                ctx.theme.font_size_xl,
                ctx.theme.text_primary,
            )?;
            ctx.divider_h(
                MARGIN_X,
                y + 48,
                state.screen_w.saturating_sub(2 * MARGIN_X as u32),
            )?;
        }

        // Header last: fixed above page content.
        state.header.draw(
            &mut ctx,
            &state.nav,
            &state.route,
            state.viewport,
            state.screen_w,
            state.screen_h,
        )?;
    }
    backend.swap_buffers()?;
    Ok(())
}
