//! Sorting algorithms expressed as step sources.
//!
//! Each algorithm keeps its own resumption state (loop indices, markers) as plain fields and
//! produces one [`Step`] per call to [`StepSource::next_step`]. Every algorithm must:
//!
//! 1. start with a [`StepKind::Initial`] step showing the untouched input,
//! 2. yield a step for every comparison and every marker change,
//! 3. yield a step right after every swap, showing the current sorted boundary,
//! 4. end with a [`StepKind::Finished`] step with the boundary at the dataset length.
//!
//! All comparisons are strict `<`. Insertion and bubble sort are stable; selection sort always
//! picks the leftmost minimum, but its long-range swap can reorder equal values.
//!
//! [`StepKind::Initial`]: crate::step::StepKind::Initial
//! [`StepKind::Finished`]: crate::step::StepKind::Finished

use crate::dataset::Dataset;
use crate::legend::Legend;
use crate::step::Step;
use serde::{Deserialize, Serialize};

pub mod bubble;
pub mod insertion;
pub mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use selection::SelectionSort;

/// A resumable sorting algorithm.
pub trait StepSource<T> {
    /// Performs one unit of progress on `data` and describes the resulting visual state.
    ///
    /// Returns `None` once the algorithm has produced its finished step. Sources are not
    /// restartable: after `None` they keep returning `None`.
    fn next_step(&mut self, data: &mut Dataset<T>) -> Option<Step>;
}

/// The built-in algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Selection,
    Insertion,
    Bubble,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Selection, Algorithm::Insertion, Algorithm::Bubble];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection sort",
            Algorithm::Insertion => "insertion sort",
            Algorithm::Bubble => "bubble sort",
        }
    }

    /// The colors this algorithm uses and what they mean.
    pub fn legend(self) -> Legend {
        match self {
            Algorithm::Selection => {
                Legend::standard("unsorted", "sorted", "current minimum", "compared")
            }
            Algorithm::Insertion => {
                Legend::standard("unsorted", "sorted prefix", "inserting", "compared")
            }
            Algorithm::Bubble => Legend::standard("unsorted", "sorted", "bubbling", "compared"),
        }
    }

    /// A fresh step source, positioned before its initial step.
    pub fn source<T: PartialOrd>(self) -> Box<dyn StepSource<T>> {
        match self {
            Algorithm::Selection => Box::new(SelectionSort::new()),
            Algorithm::Insertion => Box::new(InsertionSort::new()),
            Algorithm::Bubble => Box::new(BubbleSort::new()),
        }
    }

    /// Sorts `data` to completion without steps, rendering or hooks.
    ///
    /// Produces the same order as draining the animated sequence of the same algorithm.
    pub fn sort<T: PartialOrd>(self, mut data: Vec<T>) -> Vec<T> {
        match self {
            Algorithm::Selection => selection::sort(&mut data),
            Algorithm::Insertion => insertion::sort(&mut data),
            Algorithm::Bubble => bubble::sort(&mut data),
        }
        data
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{count, drain};
    use super::*;
    use crate::dataset::{is_permutation_of, is_sorted};
    use crate::legend::ColorToken;
    use crate::step::StepKind;
    use proptest::prelude::*;

    #[test]
    fn every_algorithm_brackets_its_steps() {
        for algorithm in Algorithm::ALL {
            let (steps, sorted) = drain(algorithm, &[5, 3, 9, 1, 3]);
            assert_eq!(steps.first().map(|s| s.kind), Some(StepKind::Initial));
            assert_eq!(steps.last(), Some(&Step::finished(5)));
            assert_eq!(count(&steps, StepKind::Initial), 1);
            assert_eq!(count(&steps, StepKind::Finished), 1);
            assert_eq!(sorted, vec![1, 3, 3, 5, 9], "{}", algorithm.name());
        }
    }

    #[test]
    fn every_algorithm_has_a_complete_legend() {
        for algorithm in Algorithm::ALL {
            let legend = algorithm.legend();
            let tokens: Vec<_> = legend.entries().iter().map(|entry| entry.color).collect();
            assert_eq!(
                tokens,
                [
                    ColorToken::Unsorted,
                    ColorToken::Sorted,
                    ColorToken::Best,
                    ColorToken::Compared
                ]
            );
        }
    }

    #[test]
    fn sorted_input_still_steps_through_every_boundary() {
        for algorithm in Algorithm::ALL {
            let (steps, _) = drain(algorithm, &[1, 2, 3, 4, 5, 6]);
            assert!(count(&steps, StepKind::Boundary) >= 6, "{}", algorithm.name());
        }
    }

    #[test]
    fn tie_policy_is_deterministic() {
        // tag each value with its input position, compare on the value only
        #[derive(Clone, Debug, PartialEq)]
        struct Tagged(u8, usize);
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }
        let input = vec![Tagged(2, 0), Tagged(2, 1), Tagged(1, 2)];
        for algorithm in Algorithm::ALL {
            let sorted = algorithm.sort(input.clone());
            let expected = match algorithm {
                // the minimum at 2 is swapped with the first 2, moving it behind the second
                Algorithm::Selection => vec![Tagged(1, 2), Tagged(2, 1), Tagged(2, 0)],
                Algorithm::Insertion | Algorithm::Bubble => {
                    vec![Tagged(1, 2), Tagged(2, 0), Tagged(2, 1)]
                }
            };
            assert_eq!(sorted, expected, "{}", algorithm.name());
            let (_, drained) = drain(algorithm, &input);
            assert_eq!(drained, sorted, "{}", algorithm.name());
        }
    }

    proptest! {
        #[test]
        fn static_sort_is_a_sorted_permutation(values in prop::collection::vec(-50i32..50, 0..40)) {
            for algorithm in Algorithm::ALL {
                let sorted = algorithm.sort(values.clone());
                prop_assert!(is_sorted(&sorted));
                prop_assert!(is_permutation_of(&sorted, &values));
            }
        }

        #[test]
        fn drained_steps_match_static_sort(values in prop::collection::vec(0u8..20, 1..30)) {
            for algorithm in Algorithm::ALL {
                let (steps, drained) = drain(algorithm, &values);
                prop_assert_eq!(&drained, &algorithm.sort(values.clone()));
                prop_assert_eq!(steps.len() >= values.len() + 2, true);
            }
        }
    }
}
