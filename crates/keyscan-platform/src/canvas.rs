//! Window pixel buffer.
//!
//! Records are drawn into an in-memory `0x00RRGGBB` buffer. Presenting copies
//! the buffer to the window through softbuffer, so the window can be
//! repainted after an expose without redrawing any record.

use std::cell::RefCell;
use std::convert::Infallible;
use std::num::NonZeroU32;
use std::rc::Rc;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};
use keyscan_core::Color;
use softbuffer::{Context, Surface};
use tracing::debug;
use winit::window::Window;

use crate::PlatformResult;

/// The canvas is shared by the text surface (drawing) and the input source
/// (repainting on expose). Both live on the loop thread.
pub type SharedCanvas = Rc<RefCell<Canvas>>;

struct Presenter {
    surface: Surface<Rc<Window>, Rc<Window>>,
    _context: Context<Rc<Window>>,
}

pub struct Canvas {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
    background: u32,
    presenter: Option<Presenter>,
}

impl Canvas {
    /// A canvas that is not attached to a window.
    pub fn offscreen(width: u32, height: u32, background: Color) -> Self {
        let background = pack(background);
        Self {
            pixels: vec![background; width as usize * height as usize],
            width,
            height,
            background,
            presenter: None,
        }
    }

    /// A canvas covering the inner area of `window`.
    pub fn for_window(window: Rc<Window>, background: Color) -> PlatformResult<Self> {
        let size = window.inner_size();
        let context = Context::new(Rc::clone(&window))?;
        let surface = Surface::new(&context, window)?;

        let mut canvas = Self::offscreen(size.width, size.height, background);
        canvas.presenter = Some(Presenter {
            surface,
            _context: context,
        });
        canvas.resize_presenter()?;
        Ok(canvas)
    }

    pub fn shared(self) -> SharedCanvas {
        Rc::new(RefCell::new(self))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels.get(index).map(|&pixel| unpack(pixel))
    }

    /// Follow a window resize, keeping the part of the image that still fits.
    pub fn resize(&mut self, width: u32, height: u32) -> PlatformResult<()> {
        if width == 0 || height == 0 {
            // Minimized; keep the old image for when the window comes back.
            debug!(width, height, "Ignoring resize to an empty area");
            return Ok(());
        }
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }

        let mut pixels = vec![self.background; width as usize * height as usize];
        let keep_width = width.min(self.width) as usize;
        for row in 0..height.min(self.height) as usize {
            let src = row * self.width as usize;
            let dst = row * width as usize;
            pixels[dst..dst + keep_width].copy_from_slice(&self.pixels[src..src + keep_width]);
        }

        self.pixels = pixels;
        self.width = width;
        self.height = height;
        self.resize_presenter()
    }

    /// Copy the buffer to the window. A no-op for offscreen canvases.
    pub fn present(&mut self) -> PlatformResult<()> {
        let Some(presenter) = self.presenter.as_mut() else {
            return Ok(());
        };
        if self.pixels.is_empty() {
            return Ok(());
        }

        let mut buffer = presenter.surface.buffer_mut()?;
        buffer.copy_from_slice(&self.pixels);
        buffer.present()?;
        Ok(())
    }

    fn resize_presenter(&mut self) -> PlatformResult<()> {
        let (Some(presenter), Some(width), Some(height)) = (
            self.presenter.as_mut(),
            NonZeroU32::new(self.width),
            NonZeroU32::new(self.height),
        ) else {
            return Ok(());
        };
        presenter.surface.resize(width, height)?;
        Ok(())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= self.width as i32
                || point.y >= self.height as i32
            {
                continue;
            }
            let index = point.y as usize * self.width as usize + point.x as usize;
            self.pixels[index] = pack(Color {
                r: color.r(),
                g: color.g(),
                b: color.b(),
            });
        }
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

pub(crate) fn to_rgb(color: Color) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

fn pack(color: Color) -> u32 {
    (u32::from(color.r) << 16) | (u32::from(color.g) << 8) | u32::from(color.b)
}

fn unpack(pixel: u32) -> Color {
    Color {
        r: (pixel >> 16) as u8,
        g: (pixel >> 8) as u8,
        b: pixel as u8,
    }
}
