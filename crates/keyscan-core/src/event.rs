//! Input event model.
//!
//! Events are produced by an [`EventSource`](crate::EventSource) and consumed
//! synchronously by the monitor loop. They are immutable once produced.

use std::fmt;
use std::time::Instant;

/// Milliseconds on the monotonic session clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Milliseconds since the session clock origin.
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, zero if `earlier` is later.
    pub fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic clock anchored at session start.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    /// Start a clock whose origin is now.
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Current time on this clock.
    pub fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed().as_millis() as u64)
    }
}

/// Physical key identifier (USB HID usage id). Layout independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scancode(pub u32);

impl Scancode {
    pub const UNKNOWN: Scancode = Scancode(0);
}

/// Logical key value as interpreted by the active keyboard layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SymbolCode(pub u32);

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload of a key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub timestamp: Timestamp,
    pub symbol: SymbolCode,
    pub scancode: Scancode,
}

/// Payload of a mouse button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonEvent {
    pub timestamp: Timestamp,
    /// Button number: 1 left, 2 middle, 3 right.
    pub button: u8,
}

/// A recognized input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyboardEvent),
    KeyUp(KeyboardEvent),
    MouseButtonDown(MouseButtonEvent),
    MouseButtonUp(MouseButtonEvent),
}

impl InputEvent {
    pub fn timestamp(&self) -> Timestamp {
        match self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => key.timestamp,
            InputEvent::MouseButtonDown(button) | InputEvent::MouseButtonUp(button) => {
                button.timestamp
            }
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::KeyDown(_) => EventKind::KeyDown,
            InputEvent::KeyUp(_) => EventKind::KeyUp,
            InputEvent::MouseButtonDown(_) => EventKind::ButtonDown,
            InputEvent::MouseButtonUp(_) => EventKind::ButtonUp,
        }
    }
}

/// The four event kinds the monitor displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    ButtonDown,
    ButtonUp,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::KeyDown,
        EventKind::KeyUp,
        EventKind::ButtonDown,
        EventKind::ButtonUp,
    ];

    /// Label written in the last column of a record.
    pub const fn label(self) -> &'static str {
        match self {
            EventKind::KeyDown => "keydown",
            EventKind::KeyUp => "keyup",
            EventKind::ButtonDown => "buttondown",
            EventKind::ButtonUp => "buttonup",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a source delivers per blocking wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    /// One of the four recognized kinds.
    Input(InputEvent),
    /// Anything else (resize, focus, motion, ...). Ignored by the monitor.
    Unrecognized(&'static str),
    /// The window was closed.
    Terminate,
}
