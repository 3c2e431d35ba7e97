//! keyscan-platform: window, text and input boundary for keyscan.
//!
//! This crate provides the collaborators `keyscan-core` consumes:
//! - `window` - the native window and its event loop
//! - `canvas` - the window's pixel buffer, presented with softbuffer
//! - `surface` - bitmap fonts and the text surface drawn on the canvas
//! - `input` - blocking input source over the window's events
//! - `keymap` - scan codes, symbol codes and key names

mod canvas;
mod error;
mod input;
mod keymap;
mod surface;
mod window;

pub use canvas::{Canvas, SharedCanvas};

pub use error::{PlatformError, PlatformResult};

pub use input::{translate, WindowInput};

pub use keymap::{key_name, scancode_for, symbol_for, SCANCODE_MASK};

pub use surface::{BitmapFont, TextImage, WindowSurface};

pub use window::AppWindow;
