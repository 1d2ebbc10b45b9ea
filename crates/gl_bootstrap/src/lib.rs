//! # GL Bootstrap
//!
//! Window and OpenGL context bootstrap with an event-driven frame loop.
//!
//! The bootstrap initializes GLFW, opens a fixed-size window with an
//! OpenGL 4.3 core context, and then blocks on input, clearing and
//! presenting the drawing surface once per batch of events until the window
//! is asked to close. Escape closes the window.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_bootstrap::prelude::*;
//!
//! let config = AppConfig::default();
//! let clear_color = config.window.clear_color;
//! let status = launch::<GlfwSystem, _, _, _>(
//!     &config,
//!     |window: &mut GlfwWindow, size| {
//!         GlRenderer::load(|name| window.proc_address(name), size, clear_color)
//!     },
//!     &mut std::io::stderr(),
//! );
//! std::process::exit(i32::from(status));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod application;
pub mod config;
pub mod error;
pub mod foundation;
pub mod input;
pub mod render;

#[cfg(test)]
pub(crate) mod testing;

pub use application::{handle_key, launch, report_fatal, run_app, RunSummary};
pub use error::{BackendError, BootstrapError, BootstrapResult, ErrorLog};

/// Common imports for bootstrap users
pub mod prelude {
    pub use crate::{
        application::{launch, run_app, RunSummary, EXIT_FAILURE, EXIT_SUCCESS},
        config::{AppConfig, Config, WindowConfig},
        error::{BootstrapError, BootstrapResult},
        foundation::logging,
        input::{InputEvent, KeyAction, KeyCode},
        render::{
            FrameRenderer, FramebufferSize, GlRenderer, GlfwSystem, GlfwWindow, WindowBackend,
            WindowSystem,
        },
    };
}
