//! Text surface drawn on the window canvas with embedded-graphics bitmap fonts.

use embedded_graphics::mono_font::{iso_8859_1, MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Point as PixelPoint, Size};
use embedded_graphics::primitives::{Primitive, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use keyscan_core::{Color, DisplaySurface, FontMetrics, Point, Rect, RenderError};

use crate::canvas::{to_rgb, SharedCanvas};
use crate::{PlatformError, PlatformResult};

/// A built-in Latin-1 bitmap font at a fixed line size.
#[derive(Clone, Copy)]
pub struct BitmapFont {
    face: &'static MonoFont<'static>,
    line_height: u32,
    tab_width: u32,
}

impl BitmapFont {
    /// Load the font called `name` ("6x10" .. "10x20"). `size` is the line
    /// height in pixels and must fit the glyphs; `tab_width` is in columns.
    pub fn load(name: &str, size: u32, tab_width: u32) -> PlatformResult<Self> {
        let face = builtin(name)
            .ok_or_else(|| PlatformError::InvalidFont(format!("no built-in font named {name:?}")))?;

        let glyph_height = face.character_size.height;
        if size < glyph_height {
            return Err(PlatformError::InvalidFont(format!(
                "size {size} is smaller than the {glyph_height}px glyphs of {name}"
            )));
        }
        if tab_width == 0 {
            return Err(PlatformError::InvalidFont("tab width must be at least 1 column".into()));
        }

        Ok(Self {
            face,
            line_height: size,
            tab_width,
        })
    }

    /// Horizontal distance between consecutive characters.
    fn advance(&self) -> u32 {
        self.face.character_size.width + self.face.character_spacing
    }
}

impl FontMetrics for BitmapFont {
    fn line_height(&self) -> u32 {
        self.line_height
    }
}

fn builtin(name: &str) -> Option<&'static MonoFont<'static>> {
    let face = match name {
        "6x10" => &iso_8859_1::FONT_6X10,
        "6x13" => &iso_8859_1::FONT_6X13,
        "7x13" => &iso_8859_1::FONT_7X13,
        "7x14" => &iso_8859_1::FONT_7X14,
        "8x13" => &iso_8859_1::FONT_8X13,
        "9x15" => &iso_8859_1::FONT_9X15,
        "9x18" => &iso_8859_1::FONT_9X18,
        "10x20" => &iso_8859_1::FONT_10X20,
        _ => return None,
    };
    Some(face)
}

/// Rendered text: the glyph coverage of one laid-out line, plus its colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextImage {
    size: Size,
    lit: Vec<bool>,
    color: Color,
}

impl TextImage {
    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Offsets of the pixels covered by glyphs.
    fn lit_pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.size.width as usize;
        self.lit
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(move |(index, _)| ((index % width) as i32, (index / width) as i32))
    }
}

/// Coverage mask the glyphs are rasterized into.
struct Mask {
    size: Size,
    lit: Vec<bool>,
}

impl DrawTarget for Mask {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= self.size.width as i32
                || point.y >= self.size.height as i32
            {
                continue;
            }
            let index = point.y as usize * self.size.width as usize + point.x as usize;
            self.lit[index] = color.is_on();
        }
        Ok(())
    }
}

impl OriginDimensions for Mask {
    fn size(&self) -> Size {
        self.size
    }
}

/// The window's drawable area.
pub struct WindowSurface {
    canvas: SharedCanvas,
    area: Rect,
}

impl WindowSurface {
    /// Draw inside the canvas as it is sized now.
    pub fn new(canvas: SharedCanvas) -> Self {
        let area = {
            let canvas = canvas.borrow();
            Rect::new(0, 0, canvas.width(), canvas.height())
        };
        Self { canvas, area }
    }

    pub fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }
}

impl DisplaySurface for WindowSurface {
    type Font = BitmapFont;
    type Text = TextImage;

    fn area(&self) -> Rect {
        self.area
    }

    fn render_text(
        &mut self,
        font: &BitmapFont,
        text: &str,
        color: Color,
    ) -> Result<TextImage, RenderError> {
        let line = layout(text, font.tab_width as usize)?;
        let columns = line.chars().count() as u32;
        let size = Size::new(columns * font.advance(), font.face.character_size.height);

        let mut mask = Mask {
            size,
            lit: vec![false; size.width as usize * size.height as usize],
        };
        let style = MonoTextStyle::new(font.face, BinaryColor::On);
        Text::with_baseline(&line, PixelPoint::zero(), style, Baseline::Top)
            .draw(&mut mask)
            .ok();

        Ok(TextImage {
            size,
            lit: mask.lit,
            color,
        })
    }

    fn blit(&mut self, text: &TextImage, at: Point) -> Result<(), RenderError> {
        if !self.area.contains(at) {
            return Err(RenderError::OutOfBounds { x: at.x, y: at.y });
        }

        let area = self.area;
        let color = to_rgb(text.color);
        let pixels = text
            .lit_pixels()
            .map(|(dx, dy)| PixelPoint::new(at.x + dx, at.y + dy))
            .filter(|point| point.x < area.right() && point.y < area.bottom())
            .map(|point| Pixel(point, color));
        self.canvas.borrow_mut().draw_iter(pixels).ok();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let fill = to_rectangle(rect).intersection(&to_rectangle(self.area));
        fill.into_styled(PrimitiveStyle::with_fill(to_rgb(color)))
            .draw(&mut *self.canvas.borrow_mut())
            .ok();
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.canvas
            .borrow_mut()
            .present()
            .map_err(|error| RenderError::Present(error.to_string()))
    }
}

/// Expand tabs to stops every `tab_width` columns. Fails on text the font
/// cannot draw.
fn layout(text: &str, tab_width: usize) -> Result<String, RenderError> {
    let mut line = String::with_capacity(text.len());
    let mut column = 0;

    for c in text.chars() {
        if c == '\t' {
            let pad = tab_width - column % tab_width;
            line.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else if c.is_control() || u32::from(c) > 0xff {
            // Fonts cover Latin-1 only.
            return Err(RenderError::Unrenderable(c));
        } else {
            line.push(c);
            column += 1;
        }
    }

    if column == 0 {
        return Err(RenderError::EmptyText);
    }
    Ok(line)
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(PixelPoint::new(rect.x, rect.y), Size::new(rect.width, rect.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Canvas;

    fn surface(width: u32, height: u32) -> WindowSurface {
        WindowSurface::new(Canvas::offscreen(width, height, Color::BLACK).shared())
    }

    fn lit_pixels(surface: &WindowSurface) -> Vec<(u32, u32)> {
        let canvas = surface.canvas().borrow();
        let mut lit = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y) == Some(Color::WHITE) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_tabs_expand_to_stops() {
        let line = layout("120\t50\t97\tA\tkeydown", 6).unwrap();
        assert_eq!(line, "120   50    97    A     keydown");
    }

    #[test]
    fn test_unrenderable_text_fails() {
        assert!(matches!(layout("", 4), Err(RenderError::EmptyText)));
        assert!(matches!(
            layout("a\u{7}", 4),
            Err(RenderError::Unrenderable('\u{7}'))
        ));
        assert!(matches!(
            layout("日本", 4),
            Err(RenderError::Unrenderable('日'))
        ));
        assert_eq!(layout("é", 4).unwrap(), "é");
    }

    #[test]
    fn test_rendered_size_follows_font() {
        let mut surface = surface(200, 60);
        let font = BitmapFont::load("10x20", 24, 4).unwrap();
        let image = surface.render_text(&font, "ab\tc", Color::WHITE).unwrap();
        assert_eq!(image.width(), 5 * 10);
        assert_eq!(image.height(), 20);
        assert!(image.lit_pixels().next().is_some());
    }

    #[test]
    fn test_blit_draws_inside_text_box() {
        let mut surface = surface(60, 40);
        let font = BitmapFont::load("10x20", 20, 4).unwrap();
        let image = surface.render_text(&font, "A", Color::WHITE).unwrap();

        surface.blit(&image, Point { x: 2, y: 1 }).unwrap();
        surface.present().unwrap();

        let lit = lit_pixels(&surface);
        assert!(!lit.is_empty());
        assert!(lit
            .iter()
            .all(|&(x, y)| (2..12).contains(&x) && (1..21).contains(&y)));
    }

    #[test]
    fn test_blit_outside_area_fails() {
        let mut surface = surface(60, 40);
        let font = BitmapFont::load("6x10", 10, 4).unwrap();
        let image = surface.render_text(&font, "x", Color::WHITE).unwrap();

        assert!(matches!(
            surface.blit(&image, Point { x: 0, y: 40 }),
            Err(RenderError::OutOfBounds { x: 0, y: 40 })
        ));
        assert!(lit_pixels(&surface).is_empty());
    }

    #[test]
    fn test_fill_rect_clears_drawn_text() {
        let mut surface = surface(60, 40);
        let font = BitmapFont::load("6x10", 10, 4).unwrap();
        let image = surface.render_text(&font, "keyup", Color::WHITE).unwrap();
        surface.blit(&image, Point { x: 0, y: 0 }).unwrap();
        assert!(!lit_pixels(&surface).is_empty());

        surface
            .fill_rect(Rect::new(-10, -10, 500, 500), Color::BLACK)
            .unwrap();
        assert!(lit_pixels(&surface).is_empty());
    }

    #[test]
    fn test_font_load_checks() {
        assert!(matches!(
            BitmapFont::load("comic-sans", 20, 8),
            Err(PlatformError::InvalidFont(_))
        ));
        assert!(matches!(
            BitmapFont::load("10x20", 12, 8),
            Err(PlatformError::InvalidFont(_))
        ));
        assert!(matches!(
            BitmapFont::load("10x20", 20, 0),
            Err(PlatformError::InvalidFont(_))
        ));
        assert_eq!(BitmapFont::load("10x20", 40, 8).unwrap().line_height(), 40);
    }
}
