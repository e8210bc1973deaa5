//! Navigation controller: overlay state machine and scroll-lock pairing.

use nimbus_types::scroll::ScrollLock;

use super::model::{NavEntry, NavModel};
use super::route::Route;
use super::viewport::Viewport;

/// Overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

/// Site navigation controller.
///
/// Owns the overlay open/closed state and the injected scroll-lock
/// capability. Invariant: the overlay is `Open` exactly when the lock is
/// held. `toggle` and `dismiss` are the only mutations and each keeps
/// acquire/release paired 1:1; the `Drop` impl releases a still-held lock
/// when the controller is torn down mid-overlay.
///
/// All operations are synchronous and total. Dispatch is single-threaded,
/// so transitions are totally ordered and the invariant holds at every
/// observation point.
pub struct NavController {
    model: NavModel,
    state: MenuState,
    lock: Box<dyn ScrollLock>,
}

impl NavController {
    /// Create a controller starting `Closed` with the lock released.
    pub fn new(model: NavModel, lock: Box<dyn ScrollLock>) -> Self {
        Self {
            model,
            state: MenuState::Closed,
            lock,
        }
    }

    /// The navigation model this controller reads.
    pub fn model(&self) -> &NavModel {
        &self.model
    }

    /// Current overlay state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Flip the overlay state.
    ///
    /// Opening acquires the page scroll lock, closing releases it. The flip
    /// is unconditional; every call changes state exactly once.
    pub fn toggle(&mut self) {
        match self.state {
            MenuState::Closed => {
                self.state = MenuState::Open;
                self.lock.acquire();
                log::debug!("navigation overlay opened");
            },
            MenuState::Open => {
                self.state = MenuState::Closed;
                self.lock.release();
                log::debug!("navigation overlay closed");
            },
        }
    }

    /// Close the overlay if it is open.
    ///
    /// No-op when already closed; the guard keeps the shared lock from
    /// being released twice. Intended trigger: activating a navigation
    /// link while the overlay is showing.
    pub fn dismiss(&mut self) {
        if self.state == MenuState::Closed {
            return;
        }
        self.state = MenuState::Closed;
        self.lock.release();
        log::debug!("navigation overlay dismissed");
    }

    /// The entry whose URL exactly equals the route fragment, if any.
    ///
    /// No prefix or partial matching; at most one entry matches. Pure:
    /// nothing is cached across route changes.
    pub fn active_entry(&self, route: &Route) -> Option<&NavEntry> {
        self.model
            .entries()
            .iter()
            .find(|e| e.url == route.fragment())
    }

    /// Entries eligible for the given layout, in display order.
    ///
    /// The desktop strip suppresses `only_mobile` entries; the mobile
    /// overlay lists everything. Independent of the overlay state.
    pub fn visible_entries(&self, viewport: Viewport) -> impl Iterator<Item = &NavEntry> {
        self.model.entries().iter().filter(move |e| match viewport {
            Viewport::Desktop => !e.only_mobile,
            Viewport::Mobile => true,
        })
    }
}

impl Drop for NavController {
    fn drop(&mut self) {
        // Scoped acquisition: a held lock never outlives the controller.
        if self.state == MenuState::Open {
            self.lock.release();
        }
    }
}
