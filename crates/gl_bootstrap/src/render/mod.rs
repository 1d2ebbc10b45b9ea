//! Rendering: window/context management and the per-frame drawing surface

pub mod surface;
pub mod window;

pub use surface::{FrameRenderer, GlRenderer};
pub use window::{FramebufferSize, GlfwSystem, GlfwWindow, SystemGuard, WindowBackend, WindowSystem};
