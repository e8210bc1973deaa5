use std::cell::RefCell;
use std::rc::Rc;

use nimbus_core::nav::{Header, NavController, Route, Viewport};
use nimbus_types::config::NimbusConfig;
use nimbus_ui::Theme;

use crate::scroll::PageScroll;

/// All mutable application state except `backend` (kept as a local in
/// main() for borrow-splitting).
pub struct AppState {
    pub config: NimbusConfig,
    pub theme: Theme,
    pub header: Header,
    pub nav: NavController,
    pub route: Route,
    pub viewport: Viewport,
    pub scroll: Rc<RefCell<PageScroll>>,
    pub screen_w: u32,
    pub screen_h: u32,
    pub frame_counter: u64,
}

impl AppState {
    /// Re-derive the viewport after a window resize.
    ///
    /// Growing past the breakpoint while the overlay is open dismisses it;
    /// the overlay exists only in the mobile layout and the scroll lock
    /// must not outlive it.
    pub fn resize(&mut self, w: u32, h: u32) {
        self.screen_w = w;
        self.screen_h = h;
        self.viewport = Viewport::classify(w, self.config.desktop_breakpoint);
        if self.viewport == Viewport::Desktop && self.nav.is_open() {
            self.nav.dismiss();
        }
    }
}
