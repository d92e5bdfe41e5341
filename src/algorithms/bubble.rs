//! Bubble sort that carries the smallest remaining value down to the boundary on every pass,
//! so the sorted region grows from the left like the other algorithms.

use super::StepSource;
use crate::dataset::Dataset;
use crate::step::{Step, StepKind};

pub fn sort<T: PartialOrd>(data: &mut [T]) {
    let size = data.len();
    for pass in 0..size {
        for j in (pass + 1..size).rev() {
            if data[j] < data[j - 1] {
                data.swap(j - 1, j);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Initial,
    Boundary,
    Compare,
    Judge,
    Finish,
    Done,
}

/// Resumable bubble sort. The "best" marker is the value currently being carried.
#[derive(Debug)]
pub struct BubbleSort {
    phase: Phase,
    pass: usize,
    j: usize,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self {
            phase: Phase::Initial,
            pass: 0,
            j: 0,
        }
    }
}

impl Default for BubbleSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> StepSource<T> for BubbleSort {
    fn next_step(&mut self, data: &mut Dataset<T>) -> Option<Step> {
        let size = data.len();
        loop {
            match self.phase {
                Phase::Initial => {
                    self.phase = Phase::Boundary;
                    return Some(Step::initial());
                }
                Phase::Boundary => {
                    if self.pass >= size {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.j = size - 1;
                    self.phase = Phase::Compare;
                    return Some(Step::new(StepKind::Boundary, self.pass, None, Some(self.j)));
                }
                Phase::Compare => {
                    if self.j <= self.pass {
                        self.pass += 1;
                        self.phase = Phase::Boundary;
                        continue;
                    }
                    self.phase = Phase::Judge;
                    return Some(Step::new(
                        StepKind::Compare,
                        self.pass,
                        Some(self.j - 1),
                        Some(self.j),
                    ));
                }
                Phase::Judge => {
                    let swapped = data.less(self.j, self.j - 1);
                    if swapped {
                        data.swap(self.j - 1, self.j);
                    }
                    self.j -= 1;
                    self.phase = Phase::Compare;
                    let kind = if swapped {
                        StepKind::Swapped
                    } else {
                        StepKind::NewBest
                    };
                    return Some(Step::new(kind, self.pass, None, Some(self.j)));
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
    fn two_elements() {
        let (steps, drained) = drain(Algorithm::Bubble, &[2, 1]);
        assert_eq!(drained, [1, 2]);
        assert_eq!(
            steps,
            [
                Step::initial(),
                Step::new(StepKind::Boundary, 0, None, Some(1)),
                Step::new(StepKind::Compare, 0, Some(0), Some(1)),
                Step::new(StepKind::Swapped, 0, None, Some(0)),
                Step::new(StepKind::Boundary, 1, None, Some(1)),
                Step::finished(2),
            ]
        );
    }

    #[test]
    fn each_pass_compares_the_unsorted_suffix() {
        let (steps, _) = drain(Algorithm::Bubble, &[1, 2, 3, 4]);
        // 3 + 2 + 1 comparisons, no swaps on sorted input
        assert_eq!(count(&steps, StepKind::Compare), 6);
        assert_eq!(count(&steps, StepKind::Swapped), 0);
    }

    #[test]
    fn static_sort_handles_duplicates() {
        let mut values = vec![3, 1, 3, 0, 1];
        sort(&mut values);
        assert_eq!(values, [0, 1, 1, 3, 3]);
    }
}
