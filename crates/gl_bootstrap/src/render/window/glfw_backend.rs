//! Window management using GLFW
//!
//! Provides window creation, OpenGL context setup and event handling on top
//! of the `glfw` crate.

use std::ffi::c_void;

use glfw::Context;

use super::backend::{WindowBackend, WindowSystem};
use crate::config::{GlProfile, WindowConfig};
use crate::error::{BackendError, ErrorLog};
use crate::input::{InputEvent, KeyAction, KeyCode};

/// Code used when GLFW fails without reporting through the error callback
const UNREPORTED_ERROR_CODE: i32 = 0;

/// Initialized GLFW library
pub struct GlfwSystem {
    // `None` once terminated. Windows hold their own reference; the library
    // shuts down when the last one is dropped.
    glfw: Option<glfw::Glfw>,
    errors: ErrorLog,
}

impl GlfwSystem {
    fn last_error_or(&self, fallback: &str) -> BackendError {
        self.errors
            .take_last()
            .unwrap_or_else(|| BackendError::new(UNREPORTED_ERROR_CODE, fallback))
    }
}

impl WindowSystem for GlfwSystem {
    type Window = GlfwWindow;

    fn init(errors: &ErrorLog) -> Result<Self, BackendError> {
        let callback_log = errors.clone();
        let glfw = glfw::init(move |error: glfw::Error, description: String| {
            let err = BackendError::new(error as i32, description);
            eprintln!("{err}");
            callback_log.record(err);
        })
        .map_err(|init_error| {
            errors
                .take_last()
                .unwrap_or_else(|| BackendError::new(UNREPORTED_ERROR_CODE, init_error.to_string()))
        })?;

        log::info!("GLFW {} initialized", glfw::get_version_string());

        Ok(Self {
            glfw: Some(glfw),
            errors: errors.clone(),
        })
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<GlfwWindow, BackendError> {
        let Some(glfw) = self.glfw.as_mut() else {
            return Err(BackendError::new(UNREPORTED_ERROR_CODE, "GLFW is not initialized"));
        };

        glfw.default_window_hints();
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::SRgbCapable(config.srgb));
        glfw.window_hint(glfw::WindowHint::DoubleBuffer(config.double_buffer));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));

        let context = &config.context;
        glfw.window_hint(glfw::WindowHint::ContextVersion(context.major, context.minor));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(context.forward_compat));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(match context.profile {
            GlProfile::Core => glfw::OpenGlProfileHint::Core,
            GlProfile::Compat => glfw::OpenGlProfileHint::Compat,
        }));
        glfw.window_hint(glfw::WindowHint::OpenGlDebugContext(context.debug));

        log::debug!(
            "Requesting {}x{} window '{}' with OpenGL {}.{} {:?} (debug: {})",
            config.width,
            config.height,
            config.title,
            context.major,
            context.minor,
            context.profile,
            context.debug
        );

        let created = glfw.create_window(
            config.width,
            config.height,
            &config.title,
            glfw::WindowMode::Windowed,
        );
        let (mut window, events) =
            created.ok_or_else(|| self.last_error_or("window creation failed"))?;

        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);

        Ok(GlfwWindow { window, events })
    }

    fn set_swap_interval(&mut self, interval: u32) {
        if let Some(glfw) = self.glfw.as_mut() {
            let interval = match interval {
                0 => glfw::SwapInterval::None,
                n => glfw::SwapInterval::Sync(n),
            };
            glfw.set_swap_interval(interval);
        }
    }

    fn wait_events(&mut self) {
        if let Some(glfw) = self.glfw.as_mut() {
            glfw.wait_events();
        }
    }

    fn terminate(&mut self) {
        if self.glfw.take().is_some() {
            log::info!("GLFW terminated");
        }
    }
}

/// GLFW window with an OpenGL context
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwWindow {
    /// Look up an OpenGL entry point in this window's context
    ///
    /// The context must be current on the calling thread.
    pub fn proc_address(&mut self, name: &str) -> *const c_void {
        self.window.get_proc_address(name) as *const c_void
    }
}

impl WindowBackend for GlfwWindow {
    fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate_event(event))
            .collect()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}

fn translate_event(event: glfw::WindowEvent) -> Option<InputEvent> {
    match event {
        glfw::WindowEvent::Key(key, _, action, _) => {
            Some(InputEvent::key(translate_key(key), translate_action(action)))
        }
        glfw::WindowEvent::Close => Some(InputEvent::CloseRequested),
        glfw::WindowEvent::FramebufferSize(width, height) => {
            Some(InputEvent::FramebufferResized { width, height })
        }
        _ => None,
    }
}

fn translate_key(key: glfw::Key) -> KeyCode {
    match key {
        glfw::Key::Escape => KeyCode::Escape,
        glfw::Key::Space => KeyCode::Space,
        glfw::Key::Enter => KeyCode::Enter,
        other => KeyCode::Other(other as i32),
    }
}

const fn translate_action(action: glfw::Action) -> KeyAction {
    match action {
        glfw::Action::Press => KeyAction::Press,
        glfw::Action::Release => KeyAction::Release,
        glfw::Action::Repeat => KeyAction::Repeat,
    }
}
