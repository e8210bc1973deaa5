//! Input dispatch for the shell.

use nimbus_core::nav::{HeaderHit, Route, Viewport};
use nimbus_types::input::{InputEvent, Key};

use crate::app_state::AppState;
use crate::scroll::WHEEL_STEP;

/// Outcome of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Handle a single input event against the application state.
pub fn handle_event(event: &InputEvent, state: &mut AppState) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,

        InputEvent::KeyPress(Key::Escape) => {
            if state.nav.is_open() {
                state.nav.dismiss();
            } else {
                return InputResult::Quit;
            }
        },

        InputEvent::KeyPress(Key::Menu) => {
            // The overlay exists only in the mobile layout.
            if state.viewport == Viewport::Mobile {
                state.nav.toggle();
            }
        },

        InputEvent::KeyPress(Key::Section(n)) => {
            let idx = n.saturating_sub(1) as usize;
            if let Some(entry) = state.nav.model().entries().get(idx) {
                state.route = Route::from_hash(entry.url.clone());
                log::debug!("jumped to section {}", entry.url);
            }
        },

        InputEvent::KeyPress(Key::Home) => state.scroll.borrow_mut().to_top(),
        InputEvent::KeyPress(Key::End) => state.scroll.borrow_mut().to_bottom(),

        InputEvent::Wheel { delta } => {
            state.scroll.borrow_mut().scroll_by(delta * WHEEL_STEP);
        },

        InputEvent::Resize { w, h } => state.resize(*w, *h),

        InputEvent::PointerClick { x, y } => {
            let hit = state.header.hit_test(
                &state.nav,
                state.viewport,
                *x,
                *y,
                state.screen_w,
                state.screen_h,
            );
            match hit {
                Some(HeaderHit::MenuButton) => state.nav.toggle(),
                Some(HeaderHit::Entry(idx)) => {
                    // Selecting a destination both navigates and closes the
                    // overlay.
                    let url = state.nav.model().entries()[idx].url.clone();
                    state.route = Route::from_hash(url);
                    state.nav.dismiss();
                },
                Some(HeaderHit::NewAccount) => state.route = Route::from_hash("#signup"),
                Some(HeaderHit::SignIn) => state.route = Route::from_hash("#login"),
                None => {},
            }
        },

        _ => {},
    }
    InputResult::Continue
}
