//! The boundary between the engine and whatever draws its frames.

use crate::error::RenderError;
use crate::legend::{ColorToken, Legend};
use crate::step::{Markers, Step};
use std::future::{self, Future};

/// One frame to draw: a snapshot of the data plus the pure styling function for it.
///
/// A frame borrows the engine's data, so it cannot outlive the render call it was made for.
#[derive(Debug)]
pub struct Frame<'a, T> {
    seq: usize,
    step: Step,
    data: &'a [T],
    legend: &'a Legend,
}

impl<'a, T> Frame<'a, T> {
    pub fn new(seq: usize, step: Step, data: &'a [T], legend: &'a Legend) -> Self {
        Self {
            seq,
            step,
            data,
            legend,
        }
    }

    /// Position of this frame in the run, starting at 0.
    pub fn seq(&self) -> usize {
        self.seq
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn markers(&self) -> Markers {
        self.step.markers
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    pub fn legend(&self) -> &'a Legend {
        self.legend
    }

    /// Style of the element at `index`.
    pub fn style(&self, index: usize) -> ColorToken {
        self.step.markers.style_at(index)
    }
}

/// Something that can draw frames.
///
/// Completion is reported through the returned future; the engine awaits it before doing any
/// further work, so a surface may take as long as it likes.
pub trait RenderSurface<T> {
    fn render(&mut self, frame: Frame<'_, T>) -> impl Future<Output = Result<(), RenderError>>;
}

/// A surface that draws nothing and completes immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl<T> RenderSurface<T> for Headless {
    fn render(&mut self, _frame: Frame<'_, T>) -> impl Future<Output = Result<(), RenderError>> {
        future::ready(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;

    #[test]
    fn frame_styles_follow_markers() {
        let legend = Legend::standard("a", "b", "c", "d");
        let data = [5, 6, 7, 8];
        let frame = Frame::new(3, Step::new(StepKind::Compare, 1, Some(3), Some(2)), &data, &legend);
        let styles: Vec<_> = (0..data.len()).map(|i| frame.style(i)).collect();
        assert_eq!(
            styles,
            [
                ColorToken::Sorted,
                ColorToken::Unsorted,
                ColorToken::Best,
                ColorToken::Compared
            ]
        );
        assert_eq!(frame.seq(), 3);
        assert_eq!(frame.markers(), frame.step().markers);
    }

    #[test]
    fn headless_completes_immediately() {
        let legend = Legend::standard("a", "b", "c", "d");
        let data = [1u8];
        let frame = Frame::new(0, Step::initial(), &data, &legend);
        assert!(pollster::block_on(RenderSurface::<u8>::render(&mut Headless, frame)).is_ok());
    }
}
