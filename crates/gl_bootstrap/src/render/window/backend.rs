//! Backend-agnostic window management traits
//!
//! The application loop is generic over these traits. Production code uses
//! the GLFW implementation; tests drive the loop with a scripted backend.

use crate::config::WindowConfig;
use crate::error::{BackendError, ErrorLog};
use crate::input::InputEvent;

/// Framebuffer dimensions in pixels
///
/// May differ from the requested window size on high-DPI displays.
/// Non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FramebufferSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl FramebufferSize {
    /// Build from the signed values backends report, clamping negatives to 0
    pub fn from_signed(width: i32, height: i32) -> Self {
        Self {
            width: u32::try_from(width).unwrap_or(0),
            height: u32::try_from(height).unwrap_or(0),
        }
    }
}

/// Windowing library lifecycle
///
/// A value of an implementing type exists only while the library is
/// initialized. [`WindowSystem::terminate`] is called exactly once, by
/// [`SystemGuard`](super::SystemGuard), and only for a system whose
/// [`WindowSystem::init`] succeeded.
pub trait WindowSystem: Sized {
    /// Window type created by this system
    type Window: WindowBackend;

    /// Initialize the library
    ///
    /// Installs the error callback first, so that errors raised during
    /// initialization itself are recorded into `errors`.
    fn init(errors: &ErrorLog) -> Result<Self, BackendError>;

    /// Create a window and its GPU context as described by `config`
    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window, BackendError>;

    /// Set the swap interval for the context current on this thread
    fn set_swap_interval(&mut self, interval: u32);

    /// Block until at least one event is available, then process all pending
    /// events
    fn wait_events(&mut self);

    /// Release the library
    fn terminate(&mut self);
}

/// A single window with its GPU context
pub trait WindowBackend {
    /// Current framebuffer size as reported by the backend
    fn framebuffer_size(&self) -> (i32, i32);

    /// Make this window's context current on the calling thread
    fn make_current(&mut self);

    /// Whether closure has been requested, by the user or the application
    fn should_close(&self) -> bool;

    /// Set or clear the close-request flag
    fn set_should_close(&mut self, should_close: bool);

    /// Take the events queued since the last call
    fn drain_events(&mut self) -> Vec<InputEvent>;

    /// Present the back buffer
    fn swap_buffers(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_size_keeps_positive_values() {
        assert_eq!(
            FramebufferSize::from_signed(2560, 1440),
            FramebufferSize { width: 2560, height: 1440 }
        );
    }

    #[test]
    fn test_framebuffer_size_clamps_negative_values() {
        let size = FramebufferSize::from_signed(-1, i32::MIN);
        assert_eq!(size, FramebufferSize { width: 0, height: 0 });

        let size = FramebufferSize::from_signed(800, -600);
        assert_eq!(size, FramebufferSize { width: 800, height: 0 });
    }
}
