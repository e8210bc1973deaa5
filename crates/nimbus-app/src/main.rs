//! NIMBUS desktop entry point.
//!
//! Marketing-site shell with a fixed responsive header. Wide windows show
//! the inline navigation strip with account buttons; narrow windows show a
//! hamburger button that toggles a full-screen overlay and locks page
//! scrolling while it is up. Click a navigation link (or press 1-4) to jump
//! to a section, M to toggle the overlay on narrow windows, Escape to close
//! the overlay or quit.

mod app_state;
mod input;
mod render;
mod scroll;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

use app_state::AppState;
use nimbus_backend_sdl::SdlBackend;
use nimbus_core::nav::{Header, NavController, NavModel, Route, Viewport};
use nimbus_types::backend::{InputBackend, RenderBackend};
use nimbus_types::config::NimbusConfig;
use nimbus_ui::Theme;
use scroll::{PageScroll, PageScrollLock};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config from CLI arg, NIMBUS_CONFIG env var, or defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NIMBUS_CONFIG").ok())
    {
        Some(path) => NimbusConfig::load(Path::new(&path))?,
        None => NimbusConfig::default(),
    };
    log::info!(
        "Starting NIMBUS ({}x{})",
        config.screen_width,
        config.screen_height,
    );

    let mut backend = SdlBackend::new(
        &config.window_title,
        config.screen_width,
        config.screen_height,
    )?;
    backend.init(config.screen_width, config.screen_height)?;

    let model = NavModel::new(NavModel::default_entries());
    log::info!("Navigation entries: {}", model.len());

    // The page scroll is shared between the shell (wheel input, rendering)
    // and the navigation controller (scroll lock while the overlay is up).
    let page_scroll = Rc::new(RefCell::new(PageScroll::new(render::page_max_scroll(
        &model,
        config.screen_height,
    ))));
    let nav = NavController::new(model, Box::new(PageScrollLock::new(&page_scroll)));

    let route = if config.start_route.is_empty() {
        Route::none()
    } else {
        Route::from_hash(config.start_route.clone())
    };
    let viewport = Viewport::classify(config.screen_width, config.desktop_breakpoint);

    let mut state = AppState {
        screen_w: config.screen_width,
        screen_h: config.screen_height,
        theme: Theme::dark(),
        header: Header::new("NIMBUS"),
        nav,
        route,
        viewport,
        scroll: page_scroll,
        config,
        frame_counter: 0,
    };

    'running: loop {
        state.frame_counter += 1;

        for event in backend.poll_events() {
            if input::handle_event(&event, &mut state) == input::InputResult::Quit {
                break 'running;
            }
        }

        render::draw_frame(&state, &mut backend)?;
    }

    backend.shutdown()?;
    log::info!("NIMBUS shut down cleanly");
    Ok(())
}
