//! The array being sorted.
//!
//! A [`Dataset`] is owned by exactly one engine for the duration of a sort. Its length is fixed
//! at construction; the only mutation it offers is exchanging two elements.

use crate::error::SortError;

/// A fixed-length, exclusively owned sequence of comparable values.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset<T> {
    values: Vec<T>,
}

impl<T> Dataset<T> {
    /// Takes ownership of `values`. Fails if there is nothing to sort.
    pub fn new(values: Vec<T>) -> Result<Self, SortError> {
        if values.is_empty() {
            return Err(SortError::Configuration("dataset must not be empty"));
        }
        Ok(Self { values })
    }

    /// Number of elements. Never changes after construction.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, a dataset cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Exchanges the elements at `i` and `j`.
    ///
    /// # Panics
    /// If either index is out of bounds. Algorithms must never produce such an index.
    pub fn swap(&mut self, i: usize, j: usize) {
        if let Err(err) = self.checked_swap(i, j) {
            panic!("{err}");
        }
    }

    /// Exchanges the elements at `i` and `j`, reporting out-of-bounds indices instead of panicking.
    pub fn checked_swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        let len = self.len();
        for index in [i, j] {
            if index >= len {
                return Err(SortError::IndexOutOfBounds { index, len });
            }
        }
        self.values.swap(i, j);
        Ok(())
    }

    /// Gives the values back, ending the dataset's ownership.
    pub fn into_inner(self) -> Vec<T> {
        self.values
    }
}

impl<T: PartialOrd> Dataset<T> {
    /// True if `values[i] < values[j]`. Strict, so ties never count as "less".
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.values[i] < self.values[j]
    }
}

/// Returns whether `values` is non-decreasing.
pub fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| !(w[1] < w[0]))
}

/// Returns whether `a` and `b` hold the same multiset of values.
pub fn is_permutation_of<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    'outer: for x in a {
        for (k, y) in b.iter().enumerate() {
            if !used[k] && x == y {
                used[k] = true;
                continue 'outer;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_is_rejected() {
        let err = Dataset::<i32>::new(vec![]).unwrap_err();
        assert!(matches!(err, SortError::Configuration(_)));
    }

    #[test]
    fn swap_with_itself_is_a_noop() {
        let mut data = Dataset::new(vec![4, 7, 1]).unwrap();
        for i in 0..data.len() {
            data.swap(i, i);
        }
        assert_eq!(data.as_slice(), &[4, 7, 1]);
    }

    #[test]
    fn swap_exchanges_elements() {
        let mut data = Dataset::new(vec![4, 7, 1]).unwrap();
        data.swap(0, 2);
        assert_eq!(data.into_inner(), vec![1, 7, 4]);
    }

    #[test]
    fn checked_swap_reports_bad_index() {
        let mut data = Dataset::new(vec![1, 2]).unwrap();
        let err = data.checked_swap(0, 2).unwrap_err();
        assert!(matches!(err, SortError::IndexOutOfBounds { index: 2, len: 2 }));
        assert_eq!(data.as_slice(), &[1, 2]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn swap_panics_on_bad_index() {
        let mut data = Dataset::new(vec![1, 2]).unwrap();
        data.swap(3, 0);
    }

    #[test]
    fn permutation_check_counts_duplicates() {
        assert!(is_permutation_of(&[2, 2, 1], &[1, 2, 2]));
        assert!(!is_permutation_of(&[2, 2, 1], &[1, 1, 2]));
        assert!(!is_permutation_of(&[1], &[1, 1]));
    }

    #[test]
    fn sortedness_allows_equal_neighbours() {
        assert!(is_sorted(&[1, 2, 2, 3]));
        assert!(!is_sorted(&[2, 1]));
    }
}
