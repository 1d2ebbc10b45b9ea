//! Exercise 1: open a window and run the frame loop
//!
//! Window size and title are compiled in. Set `RUST_LOG` for diagnostics.

use std::process::ExitCode;

use gl_bootstrap::prelude::*;

fn main() -> ExitCode {
    let config = AppConfig::default();
    logging::init(&config.logging);

    log::info!("Starting {}", config.window.title);

    let clear_color = config.window.clear_color;
    let status = launch::<GlfwSystem, _, _, _>(
        &config,
        |window: &mut GlfwWindow, size| {
            GlRenderer::load(|name| window.proc_address(name), size, clear_color)
        },
        &mut std::io::stderr(),
    );

    ExitCode::from(status)
}
