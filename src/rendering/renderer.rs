//! The `Renderer` trait and the crossterm-backed [`DisplayRenderer`].
//!
//! `DisplayRenderer` keeps two buffers: `display`, the frame being built, and `prev_display`,
//! what is currently on the terminal. `flush()` writes only the cells that differ and then
//! remembers the new frame. Cells drawn later in a frame overwrite earlier ones.

use crate::rendering::{display::Display, pixel::Pixel};
use crossterm::queue;
use crossterm::style::{Colors, Print, SetColors};
use std::io;
use std::io::Write;

/// Something pixels can be drawn on.
pub trait Renderer {
    /// Draws `pixel` at `(x, y)`. Out-of-bounds coordinates are ignored.
    fn render_pixel(&mut self, x: usize, y: usize, pixel: Pixel);

    /// Makes everything drawn since the last flush visible.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Draws `text` starting at `(x, y)`, one cell per char, in the given color.
    fn render_text(&mut self, x: usize, y: usize, text: &str, color: Option<[u8; 3]>) {
        for (offset, c) in text.chars().enumerate() {
            let pixel = Pixel::new(c);
            let pixel = match color {
                Some(color) => pixel.with_color(color),
                None => pixel,
            };
            self.render_pixel(x + offset, y, pixel);
        }
    }
}

impl<W: Write> Renderer for DisplayRenderer<W> {
    fn render_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.display.set(x, y, pixel);
    }

    fn flush(&mut self) -> io::Result<()> {
        DisplayRenderer::flush(self)
    }
}

fn rgb([r, g, b]: [u8; 3]) -> crossterm::style::Color {
    crossterm::style::Color::Rgb { r, g, b }
}

/// Renders to any `Write` sink using crossterm escape sequences, sending only changed cells.
pub struct DisplayRenderer<W: Write> {
    display: Display<Pixel>,
    prev_display: Display<Pixel>,
    default_fg_color: [u8; 3],
    default_bg_color: [u8; 3],
    sink: W,
}

impl<W: Write> DisplayRenderer<W> {
    pub fn new_with_sink(width: usize, height: usize, sink: W) -> Self {
        let mut renderer = Self {
            display: Display::new(width, height, Pixel::default()),
            prev_display: Display::new(width, height, Pixel::default()),
            default_fg_color: [255, 255, 255],
            default_bg_color: [0, 0, 0],
            sink,
        };
        renderer.invalidate();
        renderer
    }

    pub fn width(&self) -> usize {
        self.display.width()
    }

    pub fn height(&self) -> usize {
        self.display.height()
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// The cell at `(x, y)` of the frame being built (after a flush, the frame on screen).
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        self.display.get(x, y).copied()
    }

    /// Forces the next flush to redraw every cell.
    fn invalidate(&mut self) {
        // a color no real frame uses, so every cell compares unequal
        self.prev_display
            .fill(Pixel::new('\0').with_color([1, 2, 3]));
    }

    /// Resizes both buffers. The next flush redraws everything.
    pub fn resize_discard(&mut self, width: usize, height: usize) {
        self.display.resize_discard(width, height);
        self.prev_display.resize_discard(width, height);
        self.invalidate();
    }

    /// Blanks the frame being built.
    pub fn reset_screen(&mut self) {
        self.display.clear();
    }

    /// Writes the cells that changed since the last flush to the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        let (width, height) = (self.width(), self.height());
        let mut last_colors = None;
        let mut cursor = None;
        for y in 0..height {
            for x in 0..width {
                let pixel = self.display[(x, y)];
                if pixel == self.prev_display[(x, y)] {
                    continue;
                }
                if cursor != Some((x, y)) {
                    queue!(self.sink, crossterm::cursor::MoveTo(x as u16, y as u16))?;
                }
                let colors = (
                    pixel.color.unwrap_or(self.default_fg_color),
                    pixel.bg_color.unwrap_or(self.default_bg_color),
                );
                if last_colors != Some(colors) {
                    queue!(
                        self.sink,
                        SetColors(Colors {
                            foreground: Some(rgb(colors.0)),
                            background: Some(rgb(colors.1)),
                        })
                    )?;
                    last_colors = Some(colors);
                }
                queue!(self.sink, Print(pixel.c))?;
                cursor = Some((x + 1, y));
            }
        }
        self.sink.flush()?;
        self.prev_display.clone_from(&self.display);
        Ok(())
    }
}
