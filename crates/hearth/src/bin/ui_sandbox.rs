//! # HEARTH UI Sandbox
//!
//! Headless run of the demo colony screen with scripted input.
//!
//! ```bash
//! # Defaults: 120 frames at 60 Hz, info logging
//! cargo run --bin ui_sandbox
//!
//! # With a config file
//! cargo run --bin ui_sandbox -- crates/hearth/sandbox.toml
//! ```

use std::process::ExitCode;

use hearth::demo::{self, BUILD_BUTTON};
use hearth::ui::InputEvent;
use hearth::{FrameDriver, SandboxConfig};

/// Input for frame `frame`: a hover, then one click every 30 frames.
fn scripted_input(frame: u64) -> Vec<InputEvent> {
    let (x, y) = (BUILD_BUTTON.x + 4.0, BUILD_BUTTON.y + 4.0);
    match frame % 30 {
        0 => vec![InputEvent::MouseMove { x, y }],
        1 => vec![InputEvent::click(x, y)],
        2 => vec![InputEvent::release(x, y)],
        _ => Vec::new(),
    }
}

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => SandboxConfig::load(path),
        None => Ok(SandboxConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ui_sandbox: {err}");
            return ExitCode::FAILURE;
        }
    };

    let level = match config.log_level() {
        Ok(level) => level,
        Err(err) => {
            eprintln!("ui_sandbox: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    tracing::info!(
        frames = config.frames,
        frame_dt = config.frame_dt,
        ui_arena_bytes = config.memory.ui_arena_bytes,
        "sandbox starting"
    );

    let mut driver = FrameDriver::new(&config);
    let handles = demo::build_demo(&mut driver);

    for frame in 0..u64::from(config.frames) {
        let events = scripted_input(frame);
        driver.run_frame(&events, config.frame_dt);
        let clicks = demo::refresh_status(&mut driver, &handles).unwrap_or_default();

        let stats = driver.stats();
        tracing::debug!(
            frame = stats.frame,
            events = stats.events_received,
            consumed = stats.events_consumed,
            commands = stats.commands,
            clicks,
            "frame"
        );
    }

    tracing::info!(
        frames = driver.frame_count(),
        widgets = driver.ui().len(),
        scene_nodes = driver.scene().active_count(),
        textures = driver.textures().len(),
        arena_used = driver.ui().arena_used(),
        "sandbox finished"
    );
    ExitCode::SUCCESS
}
