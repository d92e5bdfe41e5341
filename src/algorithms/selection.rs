//! Selection sort.
//!
//! For every boundary `i`, scan `i + 1..len` for the leftmost minimum, then swap it into place.

use super::StepSource;
use crate::dataset::Dataset;
use crate::step::{Step, StepKind};

/// Sorts `data` in place, picking the leftmost minimum on ties.
pub fn sort<T: PartialOrd>(data: &mut [T]) {
    let size = data.len();
    for i in 0..size {
        let mut min = i;
        for j in i + 1..size {
            if data[j] < data[min] {
                min = j;
            }
        }
        data.swap(i, min);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Initial,
    Boundary,
    Compare,
    Judge,
    Swap,
    Finish,
    Done,
}

/// Resumable selection sort.
#[derive(Debug)]
pub struct SelectionSort {
    phase: Phase,
    i: usize,
    j: usize,
    min: usize,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self {
            phase: Phase::Initial,
            i: 0,
            j: 0,
            min: 0,
        }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> StepSource<T> for SelectionSort {
    fn next_step(&mut self, data: &mut Dataset<T>) -> Option<Step> {
        let size = data.len();
        loop {
            match self.phase {
                Phase::Initial => {
                    self.phase = Phase::Boundary;
                    return Some(Step::initial());
                }
                Phase::Boundary => {
                    if self.i >= size {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.min = self.i;
                    self.j = self.i + 1;
                    self.phase = Phase::Compare;
                    return Some(Step::new(StepKind::Boundary, self.i, None, Some(self.min)));
                }
                Phase::Compare => {
                    if self.j >= size {
                        self.phase = Phase::Swap;
                        continue;
                    }
                    self.phase = Phase::Judge;
                    return Some(Step::new(
                        StepKind::Compare,
                        self.i,
                        Some(self.j),
                        Some(self.min),
                    ));
                }
                Phase::Judge => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Compare;
                    if data.less(j, self.min) {
                        self.min = j;
                        return Some(Step::new(StepKind::NewBest, self.i, Some(j), Some(j)));
                    }
                }
                Phase::Swap => {
                    data.swap(self.i, self.min);
                    self.i += 1;
                    self.phase = Phase::Boundary;
                    return Some(Step::new(StepKind::Swapped, self.i, None, Some(self.min)));
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return Some(Step::finished(size));
                }
                Phase::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::{count, drain};
    use crate::algorithms::Algorithm;

    #[test]
    fn three_elements() {
        let mut values = vec![3, 1, 2];
        sort(&mut values);
        assert_eq!(values, [1, 2, 3]);

        let (steps, drained) = drain(Algorithm::Selection, &[3, 1, 2]);
        assert_eq!(drained, [1, 2, 3]);
        assert_eq!(count(&steps, StepKind::Boundary), 3);
        assert_eq!(count(&steps, StepKind::Compare), 3);
    }

    #[test]
    fn exact_trace_for_small_input() {
        let (steps, _) = drain(Algorithm::Selection, &[2, 1]);
        assert_eq!(
            steps,
            [
                Step::initial(),
                Step::new(StepKind::Boundary, 0, None, Some(0)),
                Step::new(StepKind::Compare, 0, Some(1), Some(0)),
                Step::new(StepKind::NewBest, 0, Some(1), Some(1)),
                Step::new(StepKind::Swapped, 1, None, Some(1)),
                Step::new(StepKind::Boundary, 1, None, Some(1)),
                Step::new(StepKind::Swapped, 2, None, Some(1)),
                Step::finished(2),
            ]
        );
    }

    #[test]
    fn single_element_has_no_comparisons() {
        let (steps, drained) = drain(Algorithm::Selection, &[1]);
        assert_eq!(drained, [1]);
        assert_eq!(steps.first(), Some(&Step::initial()));
        assert_eq!(steps.last(), Some(&Step::finished(1)));
        assert_eq!(count(&steps, StepKind::Compare), 0);
    }

    #[test]
    fn duplicates() {
        let (_, drained) = drain(Algorithm::Selection, &[2, 2, 1]);
        assert_eq!(drained, [1, 2, 2]);
    }

    #[test]
    fn swap_steps_follow_every_boundary() {
        let (steps, _) = drain(Algorithm::Selection, &[4, 3, 2, 1]);
        assert_eq!(
            count(&steps, StepKind::Swapped),
            count(&steps, StepKind::Boundary)
        );
    }
}
