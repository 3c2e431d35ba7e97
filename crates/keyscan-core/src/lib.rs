//! keyscan-core: event timing and display pipeline.
//!
//! Design goal: keep this crate UI-agnostic and platform-agnostic.
//! The window, text rendering and input capture live in `keyscan-platform`
//! and are reached through the [`DisplaySurface`] and [`EventSource`] traits.
//!
//! Pipeline per event: the source delivers an [`InputEvent`],
//! [`format_event`] turns it into a [`DisplayRecord`] against the
//! [`TimingContext`], and [`DisplayLog`] draws it and mirrors it to the
//! history writer. [`Monitor`] drives the loop.

mod config;
mod display;
mod error;
mod event;
mod format;
mod monitor;
mod timing;

#[cfg(test)]
mod testing;

pub use config::MonitorConfig;
pub use display::{
    AppendOutcome, Color, DisplayLog, DisplaySurface, FontMetrics, Point, Rect, ScrollCursor,
};
pub use error::{ConfigError, RenderError, SourceError};
pub use event::{
    EventKind, InputEvent, KeyboardEvent, MouseButtonEvent, Scancode, SessionClock, SourceEvent,
    SymbolCode, Timestamp,
};
pub use format::{format_event, DisplayRecord, KeyNameResolver, DELIMITER, HEADER};
pub use monitor::{EventSource, LoopState, Monitor, RunSummary};
pub use timing::TimingContext;
