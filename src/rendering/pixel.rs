//! A single terminal cell.

use crate::rendering::color::Color;

/// A character with a foreground and background color.
///
/// # Example
///
/// ```rust
/// use sortviz::rendering::pixel::Pixel;
///
/// let bar = Pixel::new('█').with_color([102, 187, 106]);
/// assert_eq!(bar.c, '█');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub c: char,
    pub color: Color,
    pub bg_color: Color,
}

impl Pixel {
    /// A pixel showing `c` in the renderer's default colors.
    pub fn new(c: char) -> Self {
        Self {
            c,
            color: Color::Default,
            bg_color: Color::Default,
        }
    }

    pub fn with_color(self, color: [u8; 3]) -> Self {
        Self {
            color: Color::Rgb(color),
            ..self
        }
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::new(' ')
    }
}
