//! Drawing surface
//!
//! The loop clears the surface, lets the scene draw, then presents. Scene
//! drawing is not implemented; [`FrameRenderer::draw`] is the hook for it.

#![allow(unsafe_code)]

use std::ffi::c_void;

use super::window::FramebufferSize;
use crate::config::ClearColor;

/// Per-frame drawing operations driven by the application loop
pub trait FrameRenderer {
    /// Clear the drawing surface
    fn clear(&mut self);

    /// Draw the scene onto the cleared surface
    fn draw(&mut self) {}
}

/// OpenGL renderer for the window's default framebuffer
#[derive(Debug)]
pub struct GlRenderer {
    size: FramebufferSize,
    clear_color: ClearColor,
}

impl GlRenderer {
    /// Load OpenGL entry points and prepare the default framebuffer
    ///
    /// The window's context must be current on the calling thread. `loader`
    /// resolves an entry point name to its address in that context.
    pub fn load<F>(loader: F, size: FramebufferSize, clear_color: ClearColor) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);

        let width = i32::try_from(size.width).unwrap_or(i32::MAX);
        let height = i32::try_from(size.height).unwrap_or(i32::MAX);

        // SAFETY: entry points were just loaded for the current context.
        unsafe {
            gl::Enable(gl::FRAMEBUFFER_SRGB);
            gl::Viewport(0, 0, width, height);
        }

        log::debug!("OpenGL renderer ready for {}x{} framebuffer", size.width, size.height);

        Self { size, clear_color }
    }

    /// Framebuffer size the renderer was set up for
    pub const fn size(&self) -> FramebufferSize {
        self.size
    }
}

impl FrameRenderer for GlRenderer {
    fn clear(&mut self) {
        let ClearColor { r, g, b, a } = self.clear_color;
        // SAFETY: entry points are loaded in `load` and the context stays
        // current on this thread for the renderer's lifetime.
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }
}
