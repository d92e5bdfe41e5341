//! Insertion sort by adjacent swaps.
//!
//! The key at the boundary sinks left while it is strictly smaller than its left neighbour.

use super::StepSource;
use crate::dataset::Dataset;
use crate::step::{Step, StepKind};

pub fn sort<T: PartialOrd>(data: &mut [T]) {
    for i in 0..data.len() {
        let mut j = i;
        while j > 0 && data[j] < data[j - 1] {
            data.swap(j - 1, j);
            j -= 1;
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

/// Resumable insertion sort. The "best" marker follows the key being inserted.
#[derive(Debug)]
pub struct InsertionSort {
    phase: Phase,
    i: usize,
    j: usize,
}

impl InsertionSort {
    pub fn new() -> Self {
        Self {
            phase: Phase::Initial,
            i: 0,
            j: 0,
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> StepSource<T> for InsertionSort {
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
                    self.j = self.i;
                    self.phase = Phase::Compare;
                    return Some(Step::new(StepKind::Boundary, self.i, None, Some(self.j)));
                }
                Phase::Compare => {
                    if self.j == 0 {
                        self.i += 1;
                        self.phase = Phase::Boundary;
                        continue;
                    }
                    self.phase = Phase::Judge;
                    return Some(Step::new(
                        StepKind::Compare,
                        self.i,
                        Some(self.j - 1),
                        Some(self.j),
                    ));
                }
                Phase::Judge => {
                    if data.less(self.j, self.j - 1) {
                        data.swap(self.j - 1, self.j);
                        self.j -= 1;
                        self.phase = Phase::Compare;
                        return Some(Step::new(StepKind::Swapped, self.i, None, Some(self.j)));
                    }
                    // settled, the prefix grows by one
                    self.i += 1;
                    self.phase = Phase::Boundary;
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
