//! Bounded scrolling display with a persistent history mirror.
//!
//! [`DisplayLog`] draws one record per line onto a [`DisplaySurface`],
//! wraps to the top (clearing the area) when the next line would cross the
//! bottom bound, and writes every record to a history writer whether or not
//! drawing succeeded.

use std::io::Write;

use tracing::{debug, warn};

use crate::{ConfigError, DisplayRecord, MonitorConfig, RenderError, HEADER};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
}

/// Metrics the display log needs from a loaded font.
pub trait FontMetrics {
    /// Vertical distance between consecutive records.
    fn line_height(&self) -> u32;
}

/// A drawable window area (implemented by keyscan-platform).
pub trait DisplaySurface {
    type Font: FontMetrics;
    /// Rendered text, ready to be blitted.
    type Text;

    /// Bounds of the drawable area.
    fn area(&self) -> Rect;

    fn render_text(
        &mut self,
        font: &Self::Font,
        text: &str,
        color: Color,
    ) -> Result<Self::Text, RenderError>;

    fn blit(&mut self, text: &Self::Text, at: Point) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    /// Make everything drawn so far visible.
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Vertical write position inside `[top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCursor {
    top: i32,
    bottom: i32,
    line_height: i32,
    y: i32,
}

impl ScrollCursor {
    pub fn new(top: i32, bottom: i32, line_height: u32) -> Result<Self, ConfigError> {
        let height = i32::try_from(line_height).unwrap_or(i32::MAX);
        if line_height == 0 {
            return Err(ConfigError::ZeroLineHeight);
        }
        if top.saturating_add(height) > bottom {
            return Err(ConfigError::NoRoomForText {
                top,
                bottom,
                line_height,
            });
        }
        Ok(Self {
            top,
            bottom,
            line_height: height,
            y: top,
        })
    }

    /// Row the next record is drawn at.
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    /// Move past the line just drawn. Returns true when the next line would
    /// not fit and the cursor went back to the top.
    pub fn advance(&mut self) -> bool {
        self.y += self.line_height;
        if self.y + self.line_height > self.bottom {
            self.y = self.top;
            true
        } else {
            false
        }
    }
}

/// What a single append did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Drawn, cursor moved one line down.
    Drawn,
    /// Drawn, then the area filled up and was cleared.
    Wrapped,
    /// Drawing failed; cursor unchanged. The history line was still written.
    RenderFailed,
}

/// Scrolling record display plus history mirror.
pub struct DisplayLog<S: DisplaySurface, W: Write> {
    surface: S,
    font: S::Font,
    history: W,
    cursor: ScrollCursor,
    left: i32,
    text_color: Color,
    background: Color,
}

impl<S: DisplaySurface, W: Write> DisplayLog<S, W> {
    /// Lay out the log inside `surface.area()` using the offsets in `config`.
    pub fn new(
        surface: S,
        font: S::Font,
        history: W,
        config: &MonitorConfig,
    ) -> Result<Self, ConfigError> {
        let area = surface.area();
        let cursor = ScrollCursor::new(
            area.y + config.text_top,
            area.bottom(),
            font.line_height(),
        )?;

        Ok(Self {
            surface,
            font,
            history,
            cursor,
            left: area.x + config.text_left,
            text_color: config.text_color,
            background: config.background,
        })
    }

    /// Blank the area and write the column header.
    pub fn write_header(&mut self) -> AppendOutcome {
        if let Err(error) = self.clear() {
            warn!(%error, "Failed to clear display area");
        }
        self.append_text(HEADER)
    }

    pub fn append(&mut self, record: &DisplayRecord) -> AppendOutcome {
        self.append_text(&record.to_string())
    }

    /// Write `text` to the history and draw it at the cursor.
    pub fn append_text(&mut self, text: &str) -> AppendOutcome {
        if let Err(error) = writeln!(self.history, "{text}").and_then(|_| self.history.flush()) {
            warn!(%error, "Failed to write history line");
        }

        let at = Point {
            x: self.left,
            y: self.cursor.y(),
        };
        if let Err(error) = self.draw(text, at) {
            warn!(%error, y = at.y, "Failed to display record");
            return AppendOutcome::RenderFailed;
        }

        if self.cursor.advance() {
            debug!("Display area full, wrapping to top");
            if let Err(error) = self.clear() {
                warn!(%error, "Failed to clear display area");
            }
            AppendOutcome::Wrapped
        } else {
            AppendOutcome::Drawn
        }
    }

    fn draw(&mut self, text: &str, at: Point) -> Result<(), RenderError> {
        let rendered = self.surface.render_text(&self.font, text, self.text_color)?;
        self.surface.blit(&rendered, at)?;
        self.surface.present()
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        let area = self.surface.area();
        self.surface.fill_rect(area, self.background)?;
        self.surface.present()
    }

    pub fn cursor(&self) -> &ScrollCursor {
        &self.cursor
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &W {
        &self.history
    }

    /// Give back the surface and history writer, in that order of release.
    pub fn into_parts(self) -> (S, W) {
        (self.surface, self.history)
    }
}
