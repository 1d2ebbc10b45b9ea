//! Application and window configuration
//!
//! Defaults reproduce the fixed, compiled-in setup of the bootstrap: a
//! 1280x720 non-resizable window with an sRGB-capable, double-buffered
//! OpenGL 4.3 core context and vertical sync.

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::logging::LoggingConfig;

/// Default window width in screen coordinates
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
/// Default window height in screen coordinates
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;
/// Default window title
pub const DEFAULT_WINDOW_TITLE: &str = "COMP3811-Exercise 1";

/// OpenGL profile requested for the context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlProfile {
    /// Core profile, no deprecated functionality
    Core,
    /// Compatibility profile
    Compat,
}

/// GPU context request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Major OpenGL version
    pub major: u32,
    /// Minor OpenGL version
    pub minor: u32,
    /// Request a forward-compatible context
    pub forward_compat: bool,
    /// Requested profile
    pub profile: GlProfile,
    /// Request a debug context; defaults to on for debug builds only,
    /// since debug contexts carry extra driver overhead
    pub debug: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            major: 4,
            minor: 3,
            forward_compat: true,
            profile: GlProfile::Core,
            debug: cfg!(debug_assertions),
        }
    }
}

/// Linear RGBA colour the drawing surface is cleared to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl ClearColor {
    /// Create a clear colour from components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::new(0.2, 0.2, 0.2, 1.0)
    }
}

/// Window creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in screen coordinates
    pub width: u32,
    /// Window height in screen coordinates
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Request an sRGB-capable default framebuffer
    pub srgb: bool,
    /// Request a double-buffered default framebuffer
    pub double_buffer: bool,
    /// Swap interval applied once the context is current (1 = vsync)
    pub swap_interval: u32,
    /// GPU context request
    pub context: ContextConfig,
    /// Surface clear colour
    pub clear_color: ClearColor,
}

impl WindowConfig {
    /// Set window dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable the debug context request
    pub const fn with_debug_context(mut self, enabled: bool) -> Self {
        self.context.debug = enabled;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_WINDOW_TITLE.to_string(),
            resizable: false,
            srgb: true,
            double_buffer: true,
            swap_interval: 1,
            context: ContextConfig::default(),
            clear_color: ClearColor::default(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logger setup
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Window and context request
    pub window: WindowConfig,
}

impl Config for AppConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_window_request() {
        let window = WindowConfig::default();
        assert_eq!((window.width, window.height), (1280, 720));
        assert_eq!(window.title, "COMP3811-Exercise 1");
        assert!(!window.resizable);
        assert!(window.srgb);
        assert!(window.double_buffer);
        assert_eq!(window.swap_interval, 1);
    }

    #[test]
    fn test_context_defaults_to_gl_43_core_forward_compat() {
        let context = ContextConfig::default();
        assert_eq!((context.major, context.minor), (4, 3));
        assert!(context.forward_compat);
        assert_eq!(context.profile, GlProfile::Core);
        assert_eq!(context.debug, cfg!(debug_assertions));
    }

    #[test]
    fn test_builder_overrides() {
        let window = WindowConfig::default()
            .with_size(320, 200)
            .with_title("Small")
            .with_debug_context(false);
        assert_eq!((window.width, window.height), (320, 200));
        assert_eq!(window.title, "Small");
        assert!(!window.context.debug);
    }
}
