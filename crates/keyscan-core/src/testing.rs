//! In-crate fakes for the collaborator traits.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;

use crate::{
    Color, DisplaySurface, EventSource, FontMetrics, KeyNameResolver, Point, Rect, RenderError,
    Scancode, SourceError, SourceEvent,
};

pub struct StubKeys;

impl KeyNameResolver for StubKeys {
    fn key_name(&self, scancode: Scancode) -> Cow<'static, str> {
        match scancode.0 {
            4 => "A".into(),
            5 => "B".into(),
            _ => "".into(),
        }
    }
}

pub struct FakeFont {
    pub line_height: u32,
}

impl FontMetrics for FakeFont {
    fn line_height(&self) -> u32 {
        self.line_height
    }
}

/// Records every draw call. Text with control characters (other than tab)
/// fails to render.
pub struct FakeSurface {
    area: Rect,
    pub blits: Vec<(Point, String)>,
    screen: Vec<(Point, String)>,
    pub clears: usize,
    pub presents: usize,
    pub fail_blits: bool,
}

impl FakeSurface {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            blits: Vec::new(),
            screen: Vec::new(),
            clears: 0,
            presents: 0,
            fail_blits: false,
        }
    }

    /// Lines currently on screen.
    pub fn visible(&self) -> Vec<(Point, String)> {
        self.screen.clone()
    }
}

impl DisplaySurface for FakeSurface {
    type Font = FakeFont;
    type Text = String;

    fn area(&self) -> Rect {
        self.area
    }

    fn render_text(
        &mut self,
        _font: &FakeFont,
        text: &str,
        _color: Color,
    ) -> Result<String, RenderError> {
        if text.is_empty() {
            return Err(RenderError::EmptyText);
        }
        if let Some(c) = text.chars().find(|c| c.is_control() && *c != '\t') {
            return Err(RenderError::Unrenderable(c));
        }
        Ok(text.to_string())
    }

    fn blit(&mut self, text: &String, at: Point) -> Result<(), RenderError> {
        if self.fail_blits || !self.area.contains(at) {
            return Err(RenderError::OutOfBounds { x: at.x, y: at.y });
        }
        self.blits.push((at, text.clone()));
        self.screen.push((at, text.clone()));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) -> Result<(), RenderError> {
        self.clears += 1;
        self.screen.retain(|(at, _)| !rect.contains(*at));
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.presents += 1;
        Ok(())
    }
}

/// Replays a fixed list of events, then reports the source as closed.
pub struct ScriptedSource {
    events: VecDeque<SourceEvent>,
    pub waits: usize,
}

impl ScriptedSource {
    pub fn new(events: impl IntoIterator<Item = SourceEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            waits: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl KeyNameResolver for ScriptedSource {
    fn key_name(&self, scancode: Scancode) -> Cow<'static, str> {
        StubKeys.key_name(scancode)
    }
}

impl EventSource for ScriptedSource {
    fn wait_next_event(&mut self) -> Result<SourceEvent, SourceError> {
        self.waits += 1;
        self.events.pop_front().ok_or(SourceError::Closed)
    }
}

/// Writer that only makes bytes visible in `flushed` once they are flushed,
/// the way a buffered stdout does.
pub struct FlushedSink {
    pending: Vec<u8>,
    flushed: Rc<RefCell<Vec<u8>>>,
}

impl FlushedSink {
    pub fn new() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let flushed = Rc::new(RefCell::new(Vec::new()));
        let sink = Self {
            pending: Vec::new(),
            flushed: Rc::clone(&flushed),
        };
        (sink, flushed)
    }
}

impl Write for FlushedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed.borrow_mut().append(&mut self.pending);
        Ok(())
    }
}
