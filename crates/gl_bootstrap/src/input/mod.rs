//! Backend-neutral input events
//!
//! Window backends translate their native events into [`InputEvent`] so the
//! application loop never sees backend types.

/// Key codes
///
/// Only keys the bootstrap distinguishes get their own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key
    Escape,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Any other key, carrying the backend's key code
    Other(i32),
}

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Key went down
    Press,
    /// Key went up
    Release,
    /// Key held long enough to auto-repeat
    Repeat,
}

/// Input and window events delivered to the application loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Keyboard input
    Key {
        /// The key
        key: KeyCode,
        /// What happened to it
        action: KeyAction,
    },

    /// The user asked the OS to close the window
    CloseRequested,

    /// The framebuffer changed size
    FramebufferResized {
        /// New width in pixels
        width: i32,
        /// New height in pixels
        height: i32,
    },
}

impl InputEvent {
    /// Shorthand for a key event
    pub const fn key(key: KeyCode, action: KeyAction) -> Self {
        Self::Key { key, action }
    }
}
