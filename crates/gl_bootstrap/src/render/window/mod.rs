//! Window management subsystem
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application loop            │
//! └─────────────┬───────────────────┘
//!               │ owns
//!      ┌────────▼────────┐
//!      │ SystemGuard     │ ← terminates the library on drop (guard.rs)
//!      └────────┬────────┘
//!               │ wraps
//!      ┌────────▼────────┐      creates     ┌────────────────┐
//!      │ WindowSystem    │ ───────────────▶ │ WindowBackend  │
//!      └────────┬────────┘                  └───────┬────────┘
//!               │ implemented by                    │
//!      ┌────────▼────────┐                  ┌───────▼────────┐
//!      │ GlfwSystem      │                  │ GlfwWindow     │ (glfw_backend.rs)
//!      └─────────────────┘                  └────────────────┘
//! ```
//!
//! - **`backend`**: the traits the loop is written against
//! - **`guard`**: scoped acquisition/release of the windowing library
//! - **`glfw_backend`**: the GLFW implementation

pub mod backend;
pub mod glfw_backend;
pub mod guard;

pub use backend::{FramebufferSize, WindowBackend, WindowSystem};
pub use glfw_backend::{GlfwSystem, GlfwWindow};
pub use guard::SystemGuard;
