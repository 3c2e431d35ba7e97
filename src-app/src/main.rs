//! keyscan: keyboard and mouse event timing monitor.
//!
//! Opens a window, shows one line per key or mouse button event with its
//! elapsed time, delta since the previous event, code, key name and kind, and
//! mirrors every line to stdout. Closing the window ends the session.

mod logging;

use std::io::{self, Write};
use std::process::ExitCode;
use std::rc::Rc;

use anyhow::Context;
use keyscan_core::{
    DisplayLog, DisplaySurface, EventSource, Monitor, MonitorConfig, RunSummary, SessionClock,
};
use keyscan_platform::{AppWindow, BitmapFont, WindowSurface};

fn main() -> ExitCode {
    logging::setup(!cfg!(debug_assertions));

    let result = run();
    match &result {
        Ok(summary) => tracing::info!(
            processed = summary.processed,
            ignored = summary.ignored,
            "keyscan finished"
        ),
        Err(error) => {
            tracing::error!("keyscan failed: {error:#}");
            eprintln!("keyscan: {error:#}");
        }
    }
    ExitCode::from(exit_status(&result))
}

fn run() -> anyhow::Result<RunSummary> {
    let config = MonitorConfig::default();
    config.validate().context("invalid configuration")?;

    let clock = SessionClock::start();
    let font = BitmapFont::load(config.font_name, config.font_size, config.tab_width)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("failed to load font")?;
    let window = AppWindow::open(config.title, config.window_width, config.window_height)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("failed to create window")?;
    let canvas = window
        .canvas(config.background)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("failed to create window surface")?;

    let surface = WindowSurface::new(Rc::clone(&canvas));
    let display = DisplayLog::new(surface, font, io::stdout(), &config)
        .context("window too small for the display area")?;
    let input = window.into_input(canvas, clock);

    drive(Monitor::new(input, display, clock.now()))
}

/// Run a session to its end. The window (held by the source and the surface)
/// is released before the final history flush.
fn drive<E, S, W>(mut monitor: Monitor<E, S, W>) -> anyhow::Result<RunSummary>
where
    E: EventSource,
    S: DisplaySurface,
    W: Write,
{
    monitor.write_header();
    let outcome = monitor.run();

    let (source, surface, mut history) = monitor.into_parts();
    drop(surface);
    drop(source);
    tracing::info!("Window closed");

    history.flush().context("failed to flush event history")?;
    outcome.context("input source failed")
}

fn exit_status(result: &anyhow::Result<RunSummary>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
