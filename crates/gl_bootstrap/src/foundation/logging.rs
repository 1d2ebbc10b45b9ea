//! Logging utilities
//!
//! The crate logs through the `log` facade; binaries install `env_logger`
//! once at startup through [`init`].

use serde::{Deserialize, Serialize};
use std::sync::Once;

pub use log::{debug, error, info, trace, warn};

/// Logger configuration
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "gl_bootstrap=debug"). When unset, `RUST_LOG` is honoured and the level
/// falls back to `info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Explicit filter string
    pub filter: Option<String>,
}

static INIT: Once = Once::new();

/// Initialize the logging system
///
/// Idempotent; later calls are ignored.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match (&config.filter, std::env::var("RUST_LOG")) {
            (Some(filter), _) => {
                builder.parse_filters(filter);
            }
            (None, Ok(filter)) => {
                builder.parse_filters(&filter);
            }
            (None, Err(_)) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        // A test harness may already own the global logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig {
            filter: Some("warn".to_string()),
        };
        init(&config);
        init(&LoggingConfig::default());
        assert!(INIT.is_completed());
    }
}
