//! Inputs for the animation: reproducible random datasets and user-supplied values.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::num::ParseIntError;

/// Derives a seed for `purpose` from a global `seed`, so different uses of one seed don't
/// produce correlated streams.
pub fn seed_for(seed: u64, purpose: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    purpose.hash(&mut hasher);
    hasher.finish()
}

/// The values `1..=len` in an order determined by `seed`.
pub fn shuffled(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed_for(seed, "shuffled"));
    let mut values: Vec<i64> = (1..=len as i64).collect();
    values.shuffle(&mut rng);
    values
}

/// `len` values drawn from `1..=max`, duplicates likely when `max < len`.
pub fn random(len: usize, max: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed_for(seed, "random"));
    (0..len).map(|_| rng.gen_range(1..=max.max(1))).collect()
}

/// Parses a comma- or whitespace-separated list of integers, e.g. `"3, 1,2"`.
pub fn parse_values(text: &str) -> Result<Vec<i64>, ParseIntError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::is_permutation_of;

    #[test]
    fn shuffled_is_a_reproducible_permutation() {
        let a = shuffled(50, 7);
        assert_eq!(a, shuffled(50, 7));
        assert_ne!(a, shuffled(50, 8));
        let identity: Vec<i64> = (1..=50).collect();
        assert!(is_permutation_of(&a, &identity));
    }

    #[test]
    fn random_values_stay_in_range() {
        let values = random(100, 5, 1);
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (1..=5).contains(v)));
        assert_eq!(values, random(100, 5, 1));
    }

    #[test]
    fn parses_mixed_separators() {
        assert_eq!(parse_values("3, 1,2\n-4").unwrap(), vec![3, 1, 2, -4]);
        assert!(parse_values("").unwrap().is_empty());
        assert!(parse_values("1,x").is_err());
    }

    #[test]
    fn purposes_get_different_seeds() {
        assert_ne!(seed_for(1, "a"), seed_for(1, "b"));
        assert_eq!(seed_for(1, "a"), seed_for(1, "a"));
    }
}
