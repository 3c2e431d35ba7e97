//! Input source reading events from the keyscan window.
//!
//! Only events delivered to keyscan's own window are seen; this is not a
//! global hook. Waiting pumps the window's event loop until it yields
//! something, with no timeout.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;

use keyscan_core::{
    EventSource, InputEvent, KeyNameResolver, KeyboardEvent, MouseButtonEvent, Scancode,
    SessionClock, SourceError, SourceEvent, Timestamp,
};
use tracing::{trace, warn};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, KeyLocation, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::keymap;
use crate::SharedCanvas;

/// Blocking event source over the window.
pub struct WindowInput {
    event_loop: EventLoop<()>,
    collector: Collector,
    exited: bool,
}

impl WindowInput {
    pub(crate) fn new(
        event_loop: EventLoop<()>,
        window: Rc<Window>,
        canvas: SharedCanvas,
        clock: SessionClock,
    ) -> Self {
        Self {
            event_loop,
            collector: Collector {
                window,
                canvas,
                clock,
                pending: VecDeque::new(),
            },
            exited: false,
        }
    }
}

impl KeyNameResolver for WindowInput {
    fn key_name(&self, scancode: Scancode) -> Cow<'static, str> {
        Cow::Borrowed(keymap::key_name(scancode))
    }
}

impl EventSource for WindowInput {
    fn wait_next_event(&mut self) -> Result<SourceEvent, SourceError> {
        loop {
            if let Some(event) = self.collector.pending.pop_front() {
                return Ok(event);
            }
            if self.exited {
                return Err(SourceError::Closed);
            }
            if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(None, &mut self.collector)
            {
                warn!(code, "Event loop exited without a close request");
                self.exited = true;
            }
        }
    }
}

/// Receives the window's events while the loop is pumped and queues them.
struct Collector {
    window: Rc<Window>,
    canvas: SharedCanvas,
    clock: SessionClock,
    pending: VecDeque<SourceEvent>,
}

impl Collector {
    fn repaint(&self) {
        if let Err(error) = self.canvas.borrow_mut().present() {
            warn!(%error, "Failed to repaint window");
        }
    }
}

impl ApplicationHandler for Collector {
    fn resumed(&mut self, _: &ActiveEventLoop) {}

    fn window_event(&mut self, _: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id != self.window.id() {
            return;
        }
        let timestamp = self.clock.now();

        match &event {
            WindowEvent::RedrawRequested => self.repaint(),
            WindowEvent::Resized(size) => {
                if let Err(error) = self.canvas.borrow_mut().resize(size.width, size.height) {
                    warn!(%error, "Failed to resize canvas");
                }
                self.window.request_redraw();
            }
            _ => {}
        }

        let event = translate(event, timestamp);
        trace!(?event, %timestamp, "Window event");
        self.pending.push_back(event);
    }
}

/// Map a window event onto the monitor's event model.
pub fn translate(event: WindowEvent, timestamp: Timestamp) -> SourceEvent {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => SourceEvent::Terminate,
        WindowEvent::KeyboardInput {
            event,
            is_synthetic: false,
            ..
        } => SourceEvent::Input(key_event(
            event.physical_key,
            &event.logical_key,
            event.location,
            event.state,
            timestamp,
        )),
        // Replayed by some platforms for keys held when focus arrives.
        WindowEvent::KeyboardInput { .. } => SourceEvent::Unrecognized("synthetickey"),
        WindowEvent::MouseInput { state, button, .. } => {
            SourceEvent::Input(button_event(state, button, timestamp))
        }
        WindowEvent::CursorMoved { .. } => SourceEvent::Unrecognized("mousemove"),
        WindowEvent::MouseWheel { .. } => SourceEvent::Unrecognized("mousewheel"),
        WindowEvent::Resized(_) => SourceEvent::Unrecognized("resize"),
        WindowEvent::Focused(_) => SourceEvent::Unrecognized("focus"),
        WindowEvent::RedrawRequested => SourceEvent::Unrecognized("redraw"),
        _ => SourceEvent::Unrecognized("window"),
    }
}

fn key_event(
    physical: PhysicalKey,
    logical: &Key,
    location: KeyLocation,
    state: ElementState,
    timestamp: Timestamp,
) -> InputEvent {
    let payload = KeyboardEvent {
        timestamp,
        symbol: keymap::symbol_for(physical, logical, location),
        scancode: keymap::scancode_for(physical),
    };
    match state {
        // Auto-repeat shows up as further key downs.
        ElementState::Pressed => InputEvent::KeyDown(payload),
        ElementState::Released => InputEvent::KeyUp(payload),
    }
}

fn button_event(state: ElementState, button: MouseButton, timestamp: Timestamp) -> InputEvent {
    let payload = MouseButtonEvent {
        timestamp,
        button: button_number(button),
    };
    match state {
        ElementState::Pressed => InputEvent::MouseButtonDown(payload),
        ElementState::Released => InputEvent::MouseButtonUp(payload),
    }
}

/// Conventional button numbering: 1 left, 2 middle, 3 right, 4/5 side buttons.
fn button_number(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Middle => 2,
        MouseButton::Right => 3,
        MouseButton::Back => 4,
        MouseButton::Forward => 5,
        MouseButton::Other(n) => u8::try_from(n).unwrap_or(u8::MAX),
    }
}
