//! Bootstrap error types
//!
//! Errors raised by the windowing backend are recorded as [`BackendError`]
//! values by the error callback. The fatal startup failures surfaced to the
//! top level are [`BootstrapError`] variants built from those records.

use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// A single error reported by the windowing backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    /// Backend-specific numeric error code
    pub code: i32,
    /// Human-readable description supplied by the backend
    pub description: String,
}

impl BackendError {
    /// Create a new backend error record
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GLFW error: {} ({})", self.description, self.code)
    }
}

/// Fatal startup errors
///
/// Both variants are non-recoverable at this layer: they unwind to the top of
/// the process, get reported, and the process exits with status 1.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// The windowing library could not be initialized
    #[error("glfwInit() failed with '{message}' ({code})")]
    Initialization {
        /// Backend-supplied description
        message: String,
        /// Backend-specific error code
        code: i32,
    },

    /// The window or its GPU context could not be created
    #[error("glfwCreateWindow() failed with '{message}' ({code})")]
    WindowCreation {
        /// Backend-supplied description
        message: String,
        /// Backend-specific error code
        code: i32,
    },
}

impl BootstrapError {
    /// Category name printed by the top-level handler
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Initialization { .. } => "InitializationError",
            Self::WindowCreation { .. } => "WindowCreationError",
        }
    }

    pub(crate) fn initialization(err: BackendError) -> Self {
        Self::Initialization {
            message: err.description,
            code: err.code,
        }
    }

    pub(crate) fn window_creation(err: BackendError) -> Self {
        Self::WindowCreation {
            message: err.description,
            code: err.code,
        }
    }
}

/// Result alias for the bootstrap sequence
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Errors recorded by the backend error callback
///
/// The callback is invoked from inside backend calls, so it must not unwind.
/// It records into this log instead, and the failing call site reads the most
/// recent entry to build its [`BootstrapError`]. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    inner: Arc<Mutex<Vec<BackendError>>>,
}

impl ErrorLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error reported by the backend
    pub fn record(&self, err: BackendError) {
        if let Ok(mut errors) = self.inner.lock() {
            errors.push(err);
        }
    }

    /// Most recently recorded error, if any
    pub fn last(&self) -> Option<BackendError> {
        self.inner.lock().ok().and_then(|errors| errors.last().cloned())
    }

    /// Remove and return the most recently recorded error
    pub fn take_last(&self) -> Option<BackendError> {
        self.inner.lock().ok().and_then(|mut errors| errors.pop())
    }

    /// Number of errors recorded so far
    pub fn count(&self) -> usize {
        self.inner.lock().map(|errors| errors.len()).unwrap_or(0)
    }
}
