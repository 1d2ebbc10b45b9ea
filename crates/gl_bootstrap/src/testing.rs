//! Scripted window system for tests
//!
//! `MockScript::install` stores a script for the current test thread and
//! returns the shared call log. The next `MockSystem::init` on that thread
//! picks the script up. Each `wait_events` delivers the next scripted batch;
//! once the script runs out, the system behaves as if the user closed the
//! window through the OS.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::WindowConfig;
use crate::error::{BackendError, ErrorLog};
use crate::input::InputEvent;
use crate::render::{FrameRenderer, FramebufferSize, WindowBackend, WindowSystem};

/// Observable backend and renderer calls, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Init,
    CreateWindow,
    MakeCurrent,
    SwapInterval(u32),
    WaitEvents,
    Clear,
    Draw,
    SwapBuffers,
    DestroyWindow,
    Terminate,
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.0.borrow().iter().filter(|c| **c == call).count()
    }

    pub fn position(&self, call: Call) -> Option<usize> {
        self.0.borrow().iter().position(|c| *c == call)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockScript {
    pub init_error: Option<BackendError>,
    pub window_error: Option<BackendError>,
    pub framebuffer: (i32, i32),
    pub batches: VecDeque<Vec<InputEvent>>,
    pub requested: Rc<RefCell<Option<WindowConfig>>>,
}

thread_local! {
    static INSTALLED: RefCell<Option<(MockScript, CallLog)>> = const { RefCell::new(None) };
}

impl MockScript {
    pub fn new() -> Self {
        Self {
            framebuffer: (1280, 720),
            ..Self::default()
        }
    }

    pub fn failing_init(mut self, code: i32, description: &str) -> Self {
        self.init_error = Some(BackendError::new(code, description));
        self
    }

    pub fn failing_window(mut self, code: i32, description: &str) -> Self {
        self.window_error = Some(BackendError::new(code, description));
        self
    }

    pub fn framebuffer(mut self, width: i32, height: i32) -> Self {
        self.framebuffer = (width, height);
        self
    }

    pub fn batch(mut self, events: Vec<InputEvent>) -> Self {
        self.batches.push_back(events);
        self
    }

    pub fn install(self) -> CallLog {
        let log = CallLog::default();
        let handle = log.clone();
        INSTALLED.with(|slot| *slot.borrow_mut() = Some((self, handle)));
        log
    }
}

pub struct MockSystem {
    log: CallLog,
    script: MockScript,
    pending: Rc<RefCell<Vec<InputEvent>>>,
    closed: Rc<Cell<bool>>,
}

impl WindowSystem for MockSystem {
    type Window = MockWindow;

    fn init(errors: &ErrorLog) -> Result<Self, BackendError> {
        let (script, log) = INSTALLED
            .with(|slot| slot.borrow_mut().take())
            .unwrap_or_else(|| (MockScript::new(), CallLog::default()));
        log.push(Call::Init);

        if let Some(err) = script.init_error.clone() {
            errors.record(err.clone());
            return Err(err);
        }

        Ok(Self {
            log,
            script,
            pending: Rc::default(),
            closed: Rc::default(),
        })
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<MockWindow, BackendError> {
        self.log.push(Call::CreateWindow);
        *self.script.requested.borrow_mut() = Some(config.clone());

        if let Some(err) = self.script.window_error.clone() {
            return Err(err);
        }

        Ok(MockWindow {
            log: self.log.clone(),
            framebuffer: self.script.framebuffer,
            pending: Rc::clone(&self.pending),
            closed: Rc::clone(&self.closed),
        })
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.log.push(Call::SwapInterval(interval));
    }

    fn wait_events(&mut self) {
        self.log.push(Call::WaitEvents);
        let batch = self
            .script
            .batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::CloseRequested]);

        // Like GLFW, an OS close sets the flag before the event is seen.
        if batch.contains(&InputEvent::CloseRequested) {
            self.closed.set(true);
        }
        self.pending.borrow_mut().extend(batch);
    }

    fn terminate(&mut self) {
        self.log.push(Call::Terminate);
    }
}

pub struct MockWindow {
    log: CallLog,
    framebuffer: (i32, i32),
    pending: Rc<RefCell<Vec<InputEvent>>>,
    closed: Rc<Cell<bool>>,
}

impl MockWindow {
    /// Standalone window for handler tests
    pub fn detached() -> Self {
        Self {
            log: CallLog::default(),
            framebuffer: (0, 0),
            pending: Rc::default(),
            closed: Rc::default(),
        }
    }

    pub fn renderer(&self) -> MockRenderer {
        MockRenderer {
            log: self.log.clone(),
        }
    }
}

impl WindowBackend for MockWindow {
    fn framebuffer_size(&self) -> (i32, i32) {
        self.framebuffer
    }

    fn make_current(&mut self) {
        self.log.push(Call::MakeCurrent);
    }

    fn should_close(&self) -> bool {
        self.closed.get()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.closed.set(should_close);
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    fn swap_buffers(&mut self) {
        self.log.push(Call::SwapBuffers);
    }
}

impl Drop for MockWindow {
    fn drop(&mut self) {
        self.log.push(Call::DestroyWindow);
    }
}

pub struct MockRenderer {
    log: CallLog,
}

impl FrameRenderer for MockRenderer {
    fn clear(&mut self) {
        self.log.push(Call::Clear);
    }

    fn draw(&mut self) {
        self.log.push(Call::Draw);
    }
}

/// Renderer factory that also captures the framebuffer size it was given
pub fn renderer_factory(
    seen: Rc<Cell<Option<FramebufferSize>>>,
) -> impl FnOnce(&mut MockWindow, FramebufferSize) -> MockRenderer {
    move |window, size| {
        seen.set(Some(size));
        window.renderer()
    }
}
