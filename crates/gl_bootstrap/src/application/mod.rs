//! Application lifecycle and frame loop
//!
//! [`run_app`] performs the whole bootstrap: library initialization, window
//! and context creation, the event-driven frame loop, and teardown. It is
//! generic over the window system so the lifecycle can be exercised without a
//! display.

use std::io::Write;
use std::time::Duration;

use crate::config::{AppConfig, WindowConfig};
use crate::error::{BootstrapError, BootstrapResult, ErrorLog};
use crate::foundation::time::Timer;
use crate::input::{InputEvent, KeyAction, KeyCode};
use crate::render::{FrameRenderer, FramebufferSize, SystemGuard, WindowBackend, WindowSystem};


/// Process exit status after a normal window close
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit status after a fatal startup error
pub const EXIT_FAILURE: u8 = 1;

/// What a completed run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Framebuffer size read back after window creation
    pub framebuffer: FramebufferSize,
    /// Frames cleared and presented
    pub frames: u64,
    /// Events dispatched from the window
    pub events: u64,
    /// Errors the backend reported through its error callback
    pub backend_errors: usize,
    /// Wall-clock time spent in the frame loop
    pub elapsed: Duration,
}

/// Handle a key event for `window`
///
/// Pressing Escape requests window closure. Returns whether closure was
/// requested; every other key and action is ignored.
pub fn handle_key<W: WindowBackend + ?Sized>(window: &mut W, key: KeyCode, action: KeyAction) -> bool {
    if key == KeyCode::Escape && action == KeyAction::Press {
        log::debug!("Escape pressed, requesting window close");
        window.set_should_close(true);
        return true;
    }
    false
}

fn dispatch_event<W: WindowBackend + ?Sized>(window: &mut W, event: InputEvent) {
    match event {
        InputEvent::Key { key, action } => {
            handle_key(window, key, action);
        }
        InputEvent::CloseRequested => {
            log::debug!("Window close requested");
        }
        InputEvent::FramebufferResized { width, height } => {
            log::debug!("Framebuffer resized to {}x{}", width, height);
        }
    }
}

/// Run the bootstrap with window system `S`
///
/// `make_renderer` is called once the context is current, with the window and
/// its framebuffer size. The loop checks the close-request flag at the top of
/// each iteration, so a close requested while handling events still lets the
/// current frame be cleared and presented.
///
/// # Errors
///
/// [`BootstrapError::Initialization`] if the library fails to start; nothing
/// is torn down in that case. [`BootstrapError::WindowCreation`] if the
/// window or context cannot be created; the library is terminated before the
/// error is returned.
pub fn run_app<S, R, F>(config: &WindowConfig, make_renderer: F) -> BootstrapResult<RunSummary>
where
    S: WindowSystem,
    R: FrameRenderer,
    F: FnOnce(&mut S::Window, FramebufferSize) -> R,
{
    let errors = ErrorLog::new();

    let system = S::init(&errors).map_err(BootstrapError::initialization)?;
    let mut system = SystemGuard::new(system);

    // Declared after the guard so it is destroyed before the library.
    let mut window = system
        .create_window(config)
        .map_err(BootstrapError::window_creation)?;
    log::info!("Window '{}' created", config.title);

    let (fb_width, fb_height) = window.framebuffer_size();
    let framebuffer = FramebufferSize::from_signed(fb_width, fb_height);
    log::info!(
        "Framebuffer {}x{} for {}x{} window",
        framebuffer.width,
        framebuffer.height,
        config.width,
        config.height
    );

    window.make_current();
    system.set_swap_interval(config.swap_interval);

    let mut renderer = make_renderer(&mut window, framebuffer);

    let mut timer = Timer::new();
    let mut events = 0_u64;

    while !window.should_close() {
        system.wait_events();
        for event in window.drain_events() {
            events += 1;
            dispatch_event(&mut window, event);
        }

        renderer.clear();
        renderer.draw();

        window.swap_buffers();
        timer.tick();
    }

    let summary = RunSummary {
        framebuffer,
        frames: timer.frame_count(),
        events,
        backend_errors: errors.count(),
        elapsed: timer.elapsed(),
    };
    log::info!(
        "Frame loop finished: {} frames, {} events in {:.2?} ({:.1} fps)",
        summary.frames,
        summary.events,
        summary.elapsed,
        timer.average_fps()
    );

    Ok(summary)
}

/// Write the top-level report for a fatal error
pub fn report_fatal<W: Write>(err: &BootstrapError, out: &mut W) {
    let written = writeln!(out, "Top-level error ({}):", err.category())
        .and_then(|()| writeln!(out, "{err}"))
        .and_then(|()| writeln!(out, "Bye."));
    if let Err(io_err) = written {
        log::warn!("Failed to write error report: {}", io_err);
    }
}

/// Run the bootstrap and map the outcome to a process exit status
///
/// Fatal errors are reported to `stderr` and yield [`EXIT_FAILURE`].
pub fn launch<S, R, F, W>(config: &AppConfig, make_renderer: F, stderr: &mut W) -> u8
where
    S: WindowSystem,
    R: FrameRenderer,
    F: FnOnce(&mut S::Window, FramebufferSize) -> R,
    W: Write,
{
    match run_app::<S, R, F>(&config.window, make_renderer) {
        Ok(_) => EXIT_SUCCESS,
        Err(err) => {
            log::error!("{}: {}", err.category(), err);
            report_fatal(&err, stderr);
            EXIT_FAILURE
        }
    }
}
