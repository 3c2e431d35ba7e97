//! The native window and the event loop that serves it.
//!
//! The loop is never handed to `run_app`: it is pumped on demand, first
//! until the window exists, then by [`WindowInput`] each time the monitor
//! waits for an event. The window is destroyed when the input source and the
//! canvas, its last owners, are dropped.

use std::rc::Rc;
use std::time::Duration;

use keyscan_core::{Color, SessionClock};
use tracing::info;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::error::OsError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::{Canvas, PlatformError, PlatformResult, SharedCanvas, WindowInput};

/// How long one startup pump waits for the platform to resume the loop.
const STARTUP_POLL: Duration = Duration::from_millis(16);

/// An open window, before its events are handed to the monitor.
pub struct AppWindow {
    event_loop: EventLoop<()>,
    window: Rc<Window>,
}

impl AppWindow {
    /// Create a fixed-size `width` x `height` window captioned `title`.
    pub fn open(title: &str, width: u32, height: u32) -> PlatformResult<Self> {
        let mut event_loop = EventLoop::new()?;
        let mut launcher = Launcher {
            attributes: attributes(title, width, height),
            window: None,
            error: None,
        };

        let window = loop {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(STARTUP_POLL), &mut launcher)
            {
                return Err(PlatformError::ExitedEarly(code));
            }
            if let Some(error) = launcher.error.take() {
                return Err(error.into());
            }
            if let Some(window) = launcher.window.take() {
                break window;
            }
        };

        let size = window.inner_size();
        info!(title, width = size.width, height = size.height, "Window opened");
        Ok(Self { event_loop, window })
    }

    /// Pixel buffer covering the window's inner area.
    pub fn canvas(&self, background: Color) -> PlatformResult<SharedCanvas> {
        Ok(Canvas::for_window(Rc::clone(&self.window), background)?.shared())
    }

    /// Hand the window's events to an input source stamping them on `clock`.
    pub fn into_input(self, canvas: SharedCanvas, clock: SessionClock) -> WindowInput {
        WindowInput::new(self.event_loop, self.window, canvas, clock)
    }
}

fn attributes(title: &str, width: u32, height: u32) -> WindowAttributes {
    Window::default_attributes()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(false)
}

/// Creates the window once the platform resumes the loop.
struct Launcher {
    attributes: WindowAttributes,
    window: Option<Rc<Window>>,
    error: Option<OsError>,
}

impl ApplicationHandler for Launcher {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => self.window = Some(Rc::new(window)),
            Err(error) => self.error = Some(error),
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
}
