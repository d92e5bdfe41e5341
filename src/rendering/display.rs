//! 2D cell buffer.
//!
//! A [`Display`] is a `width * height` grid stored row-major. It is generic so the same type can
//! hold pixels or any per-cell bookkeeping.

use std::ops::{Index, IndexMut};

/// A fixed-size grid of cells.
///
/// ```rust
/// use sortviz::rendering::display::Display;
/// use sortviz::rendering::pixel::Pixel;
///
/// let mut display = Display::new(4, 2, Pixel::default());
/// display[(3, 1)] = Pixel::new('x');
/// assert_eq!(display[(3, 1)].c, 'x');
/// assert_eq!(display.get(4, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Display<T> {
    width: usize,
    height: usize,
    default: T,
    cells: Vec<T>,
}

impl<T: Clone> Display<T> {
    pub fn new(width: usize, height: usize, default: T) -> Self {
        Self {
            width,
            height,
            cells: vec![default.clone(); width * height],
            default,
        }
    }

    /// Resets every cell to the default value.
    pub fn clear(&mut self) {
        self.fill(self.default.clone());
    }

    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|cell| *cell = value.clone());
    }

    /// Resizes and resets every cell to the default value.
    pub fn resize_discard(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![self.default.clone(); width * height];
    }
}

impl<T> Display<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Overwrites the cell at `(x, y)`. Writes outside the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
        }
    }
}

impl<T> Index<(usize, usize)> for Display<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.cells[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Display<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        &mut self.cells[y * self.width + x]
    }
}
