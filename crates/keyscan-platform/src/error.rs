//! Common error types for keyscan-platform.

use thiserror::Error;

/// Platform-level startup errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("event loop exited with code {0} before the window opened")]
    ExitedEarly(i32),
    #[error("pixel buffer error: {0}")]
    Buffer(#[from] softbuffer::SoftBufferError),
    #[error("invalid font: {0}")]
    InvalidFont(String),
}

/// Result type for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;
