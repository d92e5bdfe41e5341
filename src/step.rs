//! Steps: the values an algorithm produces each time it is advanced.

use crate::error::SortError;
use serde::{Deserialize, Serialize};

/// Index-valued algorithm state that decides how each element is styled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Elements before this position are sorted.
    pub sorted: usize,
    /// The element currently being compared, if any.
    pub compared: Option<usize>,
    /// The element the algorithm is currently tracking (current minimum, key being inserted, ...).
    pub best: Option<usize>,
}

impl Markers {
    pub fn new(sorted: usize, compared: Option<usize>, best: Option<usize>) -> Self {
        Self {
            sorted,
            compared,
            best,
        }
    }

    /// Checks that every marker addresses a dataset of length `len`.
    /// The sorted boundary may equal `len` (everything sorted), the others must be `< len`.
    pub fn validate(&self, len: usize) -> Result<(), SortError> {
        if self.sorted > len {
            return Err(SortError::IndexOutOfBounds {
                index: self.sorted,
                len,
            });
        }
        for index in [self.compared, self.best].into_iter().flatten() {
            if index >= len {
                return Err(SortError::IndexOutOfBounds { index, len });
            }
        }
        Ok(())
    }
}

/// What kind of progress a step represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// The untouched input, before any comparison.
    Initial,
    /// The sorted boundary moved to a new outer-loop position.
    Boundary,
    /// Two elements are about to be compared.
    Compare,
    /// The tracked element changed.
    NewBest,
    /// Two elements were exchanged.
    Swapped,
    /// Everything is sorted.
    Finished,
}

/// One visual state of an algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub markers: Markers,
}

impl Step {
    pub fn new(kind: StepKind, sorted: usize, compared: Option<usize>, best: Option<usize>) -> Self {
        Self {
            kind,
            markers: Markers::new(sorted, compared, best),
        }
    }

    pub fn initial() -> Self {
        Self::new(StepKind::Initial, 0, None, None)
    }

    pub fn finished(len: usize) -> Self {
        Self::new(StepKind::Finished, len, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_may_cover_whole_dataset() {
        assert!(Step::finished(3).markers.validate(3).is_ok());
        assert!(Markers::new(4, None, None).validate(3).is_err());
    }

    #[test]
    fn point_markers_must_be_in_range() {
        assert!(Markers::new(0, Some(2), Some(0)).validate(3).is_ok());
        let err = Markers::new(0, None, Some(3)).validate(3).unwrap_err();
        assert!(matches!(err, SortError::IndexOutOfBounds { index: 3, len: 3 }));
    }

    #[test]
    fn steps_serialize_with_snake_case_kinds() {
        let json = serde_json::to_string(&Step::new(StepKind::NewBest, 1, Some(2), Some(2))).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"new_best","markers":{"sorted":1,"compared":2,"best":2}}"#
        );
    }
}
