//! Platform-agnostic input event types.
//!
//! Every backend maps its native input to these enums. The core framework
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to absolute position.
    CursorMove { x: i32, y: i32 },
    /// Pointer click at absolute position (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// Pointer released.
    PointerRelease { x: i32, y: i32 },
    /// A bound key pressed.
    KeyPress(Key),
    /// Mouse wheel scrolled; positive delta scrolls down.
    Wheel { delta: i32 },
    /// The window was resized.
    Resize { w: u32, h: u32 },
    /// The window gained focus.
    FocusGained,
    /// The window lost focus.
    FocusLost,
    /// User requested quit (window close, etc.).
    Quit,
}

/// Keys the shell binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Close the overlay / quit.
    Escape,
    /// Toggle the navigation overlay.
    Menu,
    /// Jump to a page section by ordinal (1-based).
    Section(u8),
    /// Scroll to the top of the page.
    Home,
    /// Scroll to the bottom of the page.
    End,
}
