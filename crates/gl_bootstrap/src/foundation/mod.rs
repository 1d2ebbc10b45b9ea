//! Foundation module - core utilities shared by the bootstrap
//!
//! - Logging setup
//! - Frame timing

pub mod logging;
pub mod time;
