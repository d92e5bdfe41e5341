//! Colors, and the palette that turns style tokens into them.

use crate::legend::ColorToken;

/// A terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Color {
    /// Use the renderer's default color.
    #[default]
    Default,
    /// An RGB color.
    Rgb([u8; 3]),
}

impl Color {
    /// The RGB value of this color, or `fallback` for [`Color::Default`].
    pub fn unwrap_or(self, fallback: [u8; 3]) -> [u8; 3] {
        match self {
            Color::Default => fallback,
            Color::Rgb(c) => c,
        }
    }
}

/// Which RGB color each [`ColorToken`] is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub unsorted: [u8; 3],
    pub sorted: [u8; 3],
    pub best: [u8; 3],
    pub compared: [u8; 3],
}

impl Palette {
    pub fn color_of(&self, token: ColorToken) -> [u8; 3] {
        match token {
            ColorToken::Unsorted => self.unsorted,
            ColorToken::Sorted => self.sorted,
            ColorToken::Best => self.best,
            ColorToken::Compared => self.compared,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            unsorted: [120, 144, 156],
            sorted: [102, 187, 106],
            best: [239, 83, 80],
            compared: [255, 202, 40],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = Palette::default();
        let tokens = [
            ColorToken::Unsorted,
            ColorToken::Sorted,
            ColorToken::Best,
            ColorToken::Compared,
        ];
        for a in tokens {
            for b in tokens {
                if a != b {
                    assert_ne!(palette.color_of(a), palette.color_of(b));
                }
            }
        }
    }

    #[test]
    fn default_color_falls_back() {
        assert_eq!(Color::Default.unwrap_or([1, 2, 3]), [1, 2, 3]);
        assert_eq!(Color::Rgb([9, 9, 9]).unwrap_or([1, 2, 3]), [9, 9, 9]);
    }
}
