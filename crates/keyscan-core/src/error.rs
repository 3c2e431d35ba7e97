//! Error types for keyscan-core.

use thiserror::Error;

/// Per-record display failures. Never fatal to the loop.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("text has zero width")]
    EmptyText,
    #[error("unrenderable character {0:?}")]
    Unrenderable(char),
    #[error("position ({x}, {y}) is outside the display area")]
    OutOfBounds { x: i32, y: i32 },
    #[error("presenting the surface failed: {0}")]
    Present(String),
}

/// Input source failures. These end the monitor loop.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input source closed")]
    Closed,
}

/// Invalid fixed configuration, detected at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("line height must be at least 1")]
    ZeroLineHeight,
    #[error("tab width must be at least 1")]
    ZeroTabWidth,
    #[error("window {width}x{height} is too small")]
    WindowTooSmall { width: u32, height: u32 },
    #[error("no room for a {line_height}-high line between {top} and {bottom}")]
    NoRoomForText {
        top: i32,
        bottom: i32,
        line_height: u32,
    },
}
