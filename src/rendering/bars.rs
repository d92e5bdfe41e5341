//! Draws sort frames as a bar chart in the terminal.
//!
//! Layout, top to bottom: a title row (algorithm, step number, step kind, driver status), a
//! legend row, then one column of bars per element. Bars are scaled between the smallest and
//! largest value of the frame so negative values still show.
//!
//! The surface keeps a copy of the last frame, so a resize redraws it even when no further step
//! is coming (paused or finished).

use crate::error::RenderError;
use crate::legend::Legend;
use crate::rendering::color::Palette;
use crate::rendering::pixel::Pixel;
use crate::rendering::renderer::{DisplayRenderer, Renderer};
use crate::step::Markers;
use crate::surface::{Frame, Headless, RenderSurface};
use std::future::{self, Future};
use std::io;
use std::io::Write;

const HEADER_ROWS: usize = 2;
const BAR: char = '█';

/// A value that can be drawn as a bar.
pub trait BarValue {
    fn magnitude(&self) -> f64;
}

macro_rules! bar_value_impl {
    ($($typ:ty),*) => {
        $(
            impl BarValue for $typ {
                fn magnitude(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

bar_value_impl!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Lets a driver tell the surface about the terminal and its own state.
pub trait SurfaceControl {
    /// The terminal changed size. Whatever was on screen is drawn again at the new size.
    fn resize(&mut self, _width: usize, _height: usize) -> io::Result<()> {
        Ok(())
    }

    /// Replaces the driver status shown next to the title, and shows it right away.
    fn show_status(&mut self, _status: &str) -> io::Result<()> {
        Ok(())
    }
}

impl SurfaceControl for Headless {}

/// What the last rendered frame showed.
struct Snapshot {
    values: Vec<f64>,
    markers: Markers,
    legend: Legend,
}

/// A [`RenderSurface`] that draws every frame as colored bars through a [`DisplayRenderer`].
pub struct BarChartSurface<W: Write> {
    renderer: DisplayRenderer<W>,
    palette: Palette,
    title: String,
    status: String,
    header: String,
    last: Option<Snapshot>,
}

impl<W: Write> BarChartSurface<W> {
    pub fn new(width: usize, height: usize, sink: W, title: impl Into<String>) -> Self {
        Self {
            renderer: DisplayRenderer::new_with_sink(width, height, sink),
            palette: Palette::default(),
            title: title.into(),
            status: String::new(),
            header: String::new(),
            last: None,
        }
    }

    pub fn renderer(&self) -> &DisplayRenderer<W> {
        &self.renderer
    }

    fn draw_title(&mut self) {
        let width = self.renderer.width();
        let mut line = format!("{}  {}", self.title, self.header);
        if !self.status.is_empty() {
            line.push_str("  | ");
            line.push_str(&self.status);
        }
        let line = format!("{line:<width$}");
        self.renderer.render_text(0, 0, &line, None);
    }

    fn draw_legend(&mut self, legend: &Legend) {
        let mut x = 0;
        for entry in legend.entries() {
            let color = self.palette.color_of(entry.color);
            self.renderer.render_pixel(x, 1, Pixel::new(BAR).with_color(color));
            self.renderer.render_text(x + 2, 1, &entry.name, None);
            x += entry.name.chars().count() + 4;
        }
    }

    fn draw_bars(&mut self, values: &[f64], markers: Markers) {
        let rows = self.renderer.height().saturating_sub(HEADER_ROWS);
        if rows == 0 || values.is_empty() {
            return;
        }
        let column_width = (self.renderer.width() / values.len()).max(1);
        let bar_width = if column_width > 2 { column_width - 1 } else { column_width };

        let (min, max) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), &v| (min.min(v), max.max(v)),
        );
        let span = max - min;

        for (index, &value) in values.iter().enumerate() {
            let height = if span > 0.0 {
                let t = (value - min) / span;
                1 + (t * (rows - 1) as f64).round() as usize
            } else {
                rows
            };
            let color = self.palette.color_of(markers.style_at(index));
            let x0 = index * column_width;
            for dy in 0..height.min(rows) {
                let y = HEADER_ROWS + rows - 1 - dy;
                for x in x0..x0 + bar_width {
                    self.renderer.render_pixel(x, y, Pixel::new(BAR).with_color(color));
                }
            }
        }
    }

    /// Remembers `frame` and draws it.
    fn draw_frame<T: BarValue>(&mut self, frame: &Frame<'_, T>) -> io::Result<()> {
        let values = frame.data().iter().map(BarValue::magnitude);
        match &mut self.last {
            Some(last) => {
                last.values.clear();
                last.values.extend(values);
                last.markers = frame.markers();
                if last.legend != *frame.legend() {
                    last.legend = frame.legend().clone();
                }
            }
            None => {
                self.last = Some(Snapshot {
                    values: values.collect(),
                    markers: frame.markers(),
                    legend: frame.legend().clone(),
                })
            }
        }
        self.header = format!("step {:>5}  {:?}", frame.seq(), frame.step().kind);
        self.redraw()
    }

    /// Draws the remembered frame from scratch.
    fn redraw(&mut self) -> io::Result<()> {
        self.renderer.reset_screen();
        self.draw_title();
        if let Some(last) = self.last.take() {
            self.draw_legend(&last.legend);
            self.draw_bars(&last.values, last.markers);
            self.last = Some(last);
        }
        self.renderer.flush()
    }
}

impl<W: Write> SurfaceControl for BarChartSurface<W> {
    fn resize(&mut self, width: usize, height: usize) -> io::Result<()> {
        self.renderer.resize_discard(width, height);
        self.redraw()
    }

    fn show_status(&mut self, status: &str) -> io::Result<()> {
        self.status = status.to_string();
        self.draw_title();
        self.renderer.flush()
    }
}

impl<T: BarValue, W: Write> RenderSurface<T> for BarChartSurface<W> {
    fn render(&mut self, frame: Frame<'_, T>) -> impl Future<Output = Result<(), RenderError>> {
        future::ready(self.draw_frame(&frame).map_err(RenderError::from))
    }
}
