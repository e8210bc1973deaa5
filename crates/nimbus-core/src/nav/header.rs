//! Site header: fixed top bar with responsive navigation rendering.
//!
//! A pure projection of controller state. The desktop layout shows the
//! navigation strip inline plus the account buttons; the mobile layout
//! shows a hamburger button and, while the overlay is open, a full-screen
//! panel below the bar listing every entry. Drawing and pointer hit
//! testing share the same geometry helpers.

use nimbus_types::error::Result;
use nimbus_ui::button::Button;
use nimbus_ui::layout;
use nimbus_ui::menu_icon::MenuIcon;
use nimbus_ui::{DrawContext, Widget};

use super::controller::NavController;
use super::route::Route;
use super::viewport::Viewport;

// -- Layout constants ---------------------------------------------------------

/// Bar height in pixels.
const BAR_H: u32 = 64;
/// Horizontal padding at the bar edges.
const PAD_X: i32 = 20;
/// Width of one desktop navigation slot.
const SLOT_W: u32 = 128;
/// Row height in the mobile overlay.
const ROW_H: u32 = 56;
/// Hamburger button size.
const MENU_BTN_W: u32 = 44;
const MENU_BTN_H: u32 = 36;
/// Account button sizes (desktop right side).
const SIGNIN_W: u32 = 96;
const SIGNIN_H: u32 = 32;
const NEW_ACCOUNT_W: u32 = 120;
/// Gap between the account buttons.
const BTN_GAP: i32 = 12;

// -- Types --------------------------------------------------------------------

/// What a pointer click landed on inside the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHit {
    /// The hamburger toggle button.
    MenuButton,
    /// A navigation entry; index into the model's entry list.
    Entry(usize),
    /// The "New account" ghost button.
    NewAccount,
    /// The "Sign in" primary button.
    SignIn,
}

/// The site header.
pub struct Header {
    /// Logo text drawn at the left edge.
    pub logo: String,
}

impl Header {
    pub fn new(logo: impl Into<String>) -> Self {
        Self { logo: logo.into() }
    }

    /// Height of the fixed bar.
    pub fn bar_height(&self) -> u32 {
        BAR_H
    }

    /// Draw the header for the given controller state and route.
    pub fn draw(
        &self,
        ctx: &mut DrawContext<'_>,
        nav: &NavController,
        route: &Route,
        viewport: Viewport,
        screen_w: u32,
        screen_h: u32,
    ) -> Result<()> {
        // Bar background; solid while the overlay is up, translucent-ish
        // surface otherwise.
        let bar_bg = if nav.is_open() {
            ctx.theme.overlay
        } else {
            ctx.theme.surface
        };
        ctx.backend.fill_rect(0, 0, screen_w, BAR_H, bar_bg)?;
        ctx.backend.draw_line(
            0,
            BAR_H as i32 - 1,
            screen_w as i32,
            BAR_H as i32 - 1,
            1,
            ctx.theme.border_subtle,
        )?;

        // Logo.
        let logo_h = ctx.backend.measure_text_height(ctx.theme.font_size_lg);
        ctx.label_styled(
            &self.logo,
            PAD_X,
            layout::center(BAR_H, logo_h),
            ctx.theme.font_size_lg,
            ctx.theme.text_primary,
        )?;

        match viewport {
            Viewport::Desktop => self.draw_desktop(ctx, nav, route, screen_w)?,
            Viewport::Mobile => self.draw_mobile(ctx, nav, route, screen_w, screen_h)?,
        }
        Ok(())
    }

    /// Resolve a pointer click against the header geometry.
    pub fn hit_test(
        &self,
        nav: &NavController,
        viewport: Viewport,
        x: i32,
        y: i32,
        screen_w: u32,
        screen_h: u32,
    ) -> Option<HeaderHit> {
        match viewport {
            Viewport::Desktop => {
                for (model_idx, rect) in self.strip_rects(nav, screen_w) {
                    if rect_contains(rect, x, y) {
                        return Some(HeaderHit::Entry(model_idx));
                    }
                }
                if rect_contains(self.signin_rect(screen_w), x, y) {
                    return Some(HeaderHit::SignIn);
                }
                if rect_contains(self.new_account_rect(screen_w), x, y) {
                    return Some(HeaderHit::NewAccount);
                }
                None
            },
            Viewport::Mobile => {
                if rect_contains(self.menu_button_rect(screen_w), x, y) {
                    return Some(HeaderHit::MenuButton);
                }
                if nav.is_open() {
                    for (model_idx, rect) in self.overlay_row_rects(nav, screen_w, screen_h) {
                        if rect_contains(rect, x, y) {
                            return Some(HeaderHit::Entry(model_idx));
                        }
                    }
                }
                None
            },
        }
    }

    // -- Desktop layout -------------------------------------------------------

    fn draw_desktop(
        &self,
        ctx: &mut DrawContext<'_>,
        nav: &NavController,
        route: &Route,
        screen_w: u32,
    ) -> Result<()> {
        let active = nav.active_entry(route).map(|e| e.id);
        let entries = nav.model().entries();
        for (model_idx, (x, y, w, h)) in self.strip_rects(nav, screen_w) {
            let entry = &entries[model_idx];
            let color = if active == Some(entry.id) {
                ctx.theme.accent
            } else {
                ctx.theme.text_secondary
            };
            let (tw, th) = ctx.measure_text_sized(&entry.title, ctx.theme.font_size_md);
            ctx.label_styled(
                &entry.title,
                x + layout::center(w, tw),
                y + layout::center(h, th),
                ctx.theme.font_size_md,
                color,
            )?;
        }

        let (x, y, w, h) = self.new_account_rect(screen_w);
        Button::new("New account").draw(ctx, x, y, w, h)?;
        let (x, y, w, h) = self.signin_rect(screen_w);
        Button::primary("Sign in").draw(ctx, x, y, w, h)?;
        Ok(())
    }

    /// Desktop strip slots: `(model index, rect)` for each desktop-eligible
    /// entry, centered as a block in the bar.
    fn strip_rects(&self, nav: &NavController, screen_w: u32) -> Vec<(usize, Rect)> {
        let eligible: Vec<usize> = nav
            .model()
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.only_mobile)
            .map(|(i, _)| i)
            .collect();
        let total_w = eligible.len() as u32 * SLOT_W;
        let x0 = layout::center(screen_w, total_w);
        eligible
            .into_iter()
            .enumerate()
            .map(|(slot, model_idx)| {
                (
                    model_idx,
                    (x0 + (slot as u32 * SLOT_W) as i32, 0, SLOT_W, BAR_H),
                )
            })
            .collect()
    }

    fn signin_rect(&self, screen_w: u32) -> Rect {
        (
            screen_w as i32 - PAD_X - SIGNIN_W as i32,
            layout::center(BAR_H, SIGNIN_H),
            SIGNIN_W,
            SIGNIN_H,
        )
    }

    fn new_account_rect(&self, screen_w: u32) -> Rect {
        let (sx, _, _, _) = self.signin_rect(screen_w);
        (
            sx - BTN_GAP - NEW_ACCOUNT_W as i32,
            layout::center(BAR_H, SIGNIN_H),
            NEW_ACCOUNT_W,
            SIGNIN_H,
        )
    }

    // -- Mobile layout --------------------------------------------------------

    fn draw_mobile(
        &self,
        ctx: &mut DrawContext<'_>,
        nav: &NavController,
        route: &Route,
        screen_w: u32,
        screen_h: u32,
    ) -> Result<()> {
        if nav.is_open() {
            // Full-screen panel under the bar.
            ctx.backend.fill_rect(
                0,
                BAR_H as i32,
                screen_w,
                screen_h.saturating_sub(BAR_H),
                ctx.theme.overlay,
            )?;

            let active = nav.active_entry(route).map(|e| e.id);
            let entries = nav.model().entries();
            for (model_idx, (x, y, w, h)) in self.overlay_row_rects(nav, screen_w, screen_h) {
                let entry = &entries[model_idx];
                let color = if active == Some(entry.id) {
                    ctx.theme.accent
                } else {
                    ctx.theme.text_primary
                };
                let (tw, th) = ctx.measure_text_sized(&entry.title, ctx.theme.font_size_lg);
                ctx.label_styled(
                    &entry.title,
                    x + layout::center(w, tw),
                    y + layout::center(h, th),
                    ctx.theme.font_size_lg,
                    color,
                )?;
            }
        }

        // Hamburger button last so it sits above the panel edge.
        let (x, y, w, h) = self.menu_button_rect(screen_w);
        ctx.backend
            .fill_rounded_rect(x, y, w, h, ctx.theme.border_radius_md, ctx.theme.button_bg)?;
        let icon = MenuIcon::new(nav.is_open());
        let (iw, ih) = icon.measure(ctx, w, h);
        icon.draw(
            ctx,
            x + layout::center(w, iw),
            y + layout::center(h, ih),
            iw,
            ih,
        )?;
        Ok(())
    }

    fn menu_button_rect(&self, screen_w: u32) -> Rect {
        (
            screen_w as i32 - PAD_X - MENU_BTN_W as i32,
            layout::center(BAR_H, MENU_BTN_H),
            MENU_BTN_W,
            MENU_BTN_H,
        )
    }

    /// Overlay rows: `(model index, rect)` for every entry, the block
    /// vertically centered in the space under the bar.
    fn overlay_row_rects(
        &self,
        nav: &NavController,
        screen_w: u32,
        screen_h: u32,
    ) -> Vec<(usize, Rect)> {
        let n = nav.model().len() as u32;
        let panel_h = screen_h.saturating_sub(BAR_H);
        let y0 = BAR_H as i32 + layout::center(panel_h, n * ROW_H);
        (0..n as usize)
            .map(|i| (i, (0, y0 + (i as u32 * ROW_H) as i32, screen_w, ROW_H)))
            .collect()
    }
}

type Rect = (i32, i32, u32, u32);

fn rect_contains((rx, ry, rw, rh): Rect, x: i32, y: i32) -> bool {
    x >= rx && x < rx + rw as i32 && y >= ry && y < ry + rh as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::model::{NavEntry, NavModel};
    use crate::nav::test_utils::{MockBackend, RecordingLock};
    use nimbus_ui::Theme;

    const W: u32 = 1280;
    const H: u32 = 800;

    fn controller() -> NavController {
        let (lock, _) = RecordingLock::new();
        let model = NavModel::new(vec![
            NavEntry::new(1, "Alpha", "#alpha"),
            NavEntry::new(2, "Beta", "#beta"),
            NavEntry::mobile_only(3, "Gamma", "#gamma"),
        ]);
        NavController::new(model, Box::new(lock))
    }

    fn draw(nav: &NavController, route: &Route, viewport: Viewport) -> MockBackend {
        let theme = Theme::dark();
        let mut backend = MockBackend::new();
        {
            let mut ctx = DrawContext::new(&mut backend, &theme);
            Header::new("NIMBUS")
                .draw(&mut ctx, nav, route, viewport, W, H)
                .unwrap();
        }
        backend
    }

    #[test]
    fn draws_logo() {
        let nav = controller();
        let backend = draw(&nav, &Route::none(), Viewport::Desktop);
        assert!(backend.has_text("NIMBUS"));
    }

    #[test]
    fn desktop_strip_hides_mobile_only_entries() {
        let nav = controller();
        let backend = draw(&nav, &Route::none(), Viewport::Desktop);
        assert!(backend.has_text("Alpha"));
        assert!(backend.has_text("Beta"));
        assert!(!backend.has_text("Gamma"));
    }

    #[test]
    fn desktop_draws_account_buttons() {
        let nav = controller();
        let backend = draw(&nav, &Route::none(), Viewport::Desktop);
        assert!(backend.has_text("New account"));
        assert!(backend.has_text("Sign in"));
    }

    #[test]
    fn mobile_closed_draws_no_entries() {
        let nav = controller();
        let backend = draw(&nav, &Route::none(), Viewport::Mobile);
        assert!(!backend.has_text("Alpha"));
        assert!(!backend.has_text("Gamma"));
        // Only the logo text remains.
        assert_eq!(backend.draw_text_count(), 1);
    }

    #[test]
    fn mobile_open_lists_every_entry() {
        let mut nav = controller();
        nav.toggle();
        let backend = draw(&nav, &Route::none(), Viewport::Mobile);
        assert!(backend.has_text("Alpha"));
        assert!(backend.has_text("Beta"));
        assert!(backend.has_text("Gamma"));
        // Bar, overlay panel, and hamburger button backgrounds.
        assert!(backend.fill_rect_count() >= 3);
    }

    #[test]
    fn active_entry_drawn_in_accent() {
        let theme = Theme::dark();
        let nav = controller();
        let backend = draw(&nav, &Route::from_hash("#beta"), Viewport::Desktop);
        assert_eq!(backend.text_color_of("Beta"), Some(theme.accent));
        assert_eq!(backend.text_color_of("Alpha"), Some(theme.text_secondary));
    }

    #[test]
    fn no_route_highlights_nothing() {
        let theme = Theme::dark();
        let nav = controller();
        let backend = draw(&nav, &Route::from_hash("#elsewhere"), Viewport::Desktop);
        assert_eq!(backend.text_color_of("Alpha"), Some(theme.text_secondary));
        assert_eq!(backend.text_color_of("Beta"), Some(theme.text_secondary));
    }

    #[test]
    fn overlay_active_entry_in_accent() {
        let theme = Theme::dark();
        let mut nav = controller();
        nav.toggle();
        let backend = draw(&nav, &Route::from_hash("#gamma"), Viewport::Mobile);
        assert_eq!(backend.text_color_of("Gamma"), Some(theme.accent));
        assert_eq!(backend.text_color_of("Alpha"), Some(theme.text_primary));
    }

    // -- Hit testing ----------------------------------------------------------

    #[test]
    fn hit_menu_button_on_mobile() {
        let nav = controller();
        let header = Header::new("NIMBUS");
        let (x, y, w, h) = header.menu_button_rect(W);
        let hit = header.hit_test(&nav, Viewport::Mobile, x + w as i32 / 2, y + h as i32 / 2, W, H);
        assert_eq!(hit, Some(HeaderHit::MenuButton));
    }

    #[test]
    fn no_menu_button_on_desktop() {
        let nav = controller();
        let header = Header::new("NIMBUS");
        let (x, y, ..) = header.menu_button_rect(W);
        // That corner of the bar holds the account buttons on desktop.
        let hit = header.hit_test(&nav, Viewport::Desktop, x + 2, y + 2, W, H);
        assert_ne!(hit, Some(HeaderHit::MenuButton));
    }

    #[test]
    fn hit_overlay_row_when_open() {
        let mut nav = controller();
        nav.toggle();
        let header = Header::new("NIMBUS");
        let rows = header.overlay_row_rects(&nav, W, H);
        let (model_idx, (x, y, w, h)) = rows[1];
        let hit = header.hit_test(
            &nav,
            Viewport::Mobile,
            x + w as i32 / 2,
            y + h as i32 / 2,
            W,
            H,
        );
        assert_eq!(hit, Some(HeaderHit::Entry(model_idx)));
    }

    #[test]
    fn overlay_rows_do_not_hit_when_closed() {
        let nav = controller();
        let header = Header::new("NIMBUS");
        let rows = header.overlay_row_rects(&nav, W, H);
        let (_, (x, y, w, h)) = rows[0];
        let hit = header.hit_test(
            &nav,
            Viewport::Mobile,
            x + w as i32 / 2,
            y + h as i32 / 2,
            W,
            H,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn hit_desktop_strip_entry() {
        let nav = controller();
        let header = Header::new("NIMBUS");
        let rects = header.strip_rects(&nav, W);
        assert_eq!(rects.len(), 2);
        let (model_idx, (x, y, w, h)) = rects[0];
        let hit = header.hit_test(
            &nav,
            Viewport::Desktop,
            x + w as i32 / 2,
            y + h as i32 / 2,
            W,
            H,
        );
        assert_eq!(hit, Some(HeaderHit::Entry(model_idx)));
        assert_eq!(model_idx, 0);
    }

    #[test]
    fn hit_signin_on_desktop() {
        let nav = controller();
        let header = Header::new("NIMBUS");
        let (x, y, w, h) = header.signin_rect(W);
        let hit = header.hit_test(
            &nav,
            Viewport::Desktop,
            x + w as i32 / 2,
            y + h as i32 / 2,
            W,
            H,
        );
        assert_eq!(hit, Some(HeaderHit::SignIn));
    }

    #[test]
    fn miss_returns_none() {
        let nav = controller();
        let header = Header::new("NIMBUS");
        assert_eq!(header.hit_test(&nav, Viewport::Desktop, 5, 500, W, H), None);
    }
}
