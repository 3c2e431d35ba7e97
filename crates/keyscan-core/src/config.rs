//! Fixed monitor configuration.
//!
//! Values are compiled in; there is no config file, no CLI flag and no
//! environment override. [`MonitorConfig::validate`] runs once at startup.

use crate::{Color, ConfigError};

/// Smallest usable window, in pixels.
const MIN_WINDOW_WIDTH: u32 = 2;
const MIN_WINDOW_HEIGHT: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Window caption.
    pub title: &'static str,
    /// Requested window width in pixels. The windowing system may adjust it.
    pub window_width: u32,
    /// Requested window height in pixels.
    pub window_height: u32,
    /// Horizontal offset of every record inside the window.
    pub text_left: i32,
    /// Offset of the first line from the top of the window.
    pub text_top: i32,
    /// Name of the bitmap font records are drawn with.
    pub font_name: &'static str,
    /// Font size in pixels. Also the distance between consecutive records.
    pub font_size: u32,
    /// Columns between tab stops when a record is laid out.
    pub tab_width: u32,
    pub text_color: Color,
    pub background: Color,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            title: "Monitor keyboard & mouse buttons",
            window_width: 1280,
            window_height: 800,
            text_left: 100,
            text_top: 10,
            font_name: "10x20",
            font_size: 40,
            tab_width: 8,
            text_color: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_size == 0 {
            return Err(ConfigError::ZeroLineHeight);
        }
        if self.tab_width == 0 {
            return Err(ConfigError::ZeroTabWidth);
        }
        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
            });
        }
        let bottom = i32::try_from(self.window_height).unwrap_or(i32::MAX);
        let line_height = i32::try_from(self.font_size).unwrap_or(i32::MAX);
        if self.text_top < 0 || self.text_top.saturating_add(line_height) > bottom {
            return Err(ConfigError::NoRoomForText {
                top: self.text_top,
                bottom,
                line_height: self.font_size,
            });
        }
        Ok(())
    }
}
