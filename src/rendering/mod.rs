//! Terminal rendering.
//!
//! *   [`color`]: [`Color`](color::Color) and the token [`Palette`](color::Palette).
//! *   [`display`]: [`Display`](display::Display), a 2D cell buffer.
//! *   [`pixel`]: [`Pixel`](pixel::Pixel), one character cell.
//! *   [`renderer`]: the [`Renderer`](renderer::Renderer) trait and the diffing
//!     [`DisplayRenderer`](renderer::DisplayRenderer).
//! *   [`bars`]: [`BarChartSurface`](bars::BarChartSurface), the render surface that draws a
//!     sort's frames as colored bars.

pub mod bars;
pub mod color;
pub mod display;
pub mod pixel;
pub mod renderer;
