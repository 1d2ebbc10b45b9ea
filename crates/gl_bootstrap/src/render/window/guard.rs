//! Scoped ownership of an initialized windowing library

use std::ops::{Deref, DerefMut};

use super::backend::WindowSystem;

/// Owns an initialized [`WindowSystem`] and terminates it on drop
///
/// Construct it immediately after a successful `init`; every exit path from
/// that point on, including early error returns, releases the library exactly
/// once. Windows created from the system must be dropped before the guard,
/// which holds naturally when they are declared after it.
pub struct SystemGuard<S: WindowSystem> {
    system: S,
}

impl<S: WindowSystem> SystemGuard<S> {
    /// Take ownership of an initialized system
    pub const fn new(system: S) -> Self {
        Self { system }
    }
}

impl<S: WindowSystem> Deref for SystemGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.system
    }
}

impl<S: WindowSystem> DerefMut for SystemGuard<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.system
    }
}

impl<S: WindowSystem> Drop for SystemGuard<S> {
    fn drop(&mut self) {
        log::debug!("Terminating windowing library");
        self.system.terminate();
    }
}
