//! Synthetic input generation.
//!
//! Shapes are reproducible, values are not: [`generate`] draws from the
//! unseeded thread-local RNG. Use [`generate_with`] and a seeded RNG when a
//! test needs the same values twice.

use crate::error::Error;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The distribution of a generated dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatasetShape {
    /// Values drawn uniformly from `[0, size * 10)`.
    #[default]
    Random,
    /// `size, size - 1, ..., 1`.
    Reverse,
    /// `0..size` with `size / 10` random transpositions applied.
    PartiallySorted,
}

impl DatasetShape {
    pub const ALL: [DatasetShape; 3] = [
        DatasetShape::Random,
        DatasetShape::Reverse,
        DatasetShape::PartiallySorted,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DatasetShape::Random => "random",
            DatasetShape::Reverse => "reverse",
            DatasetShape::PartiallySorted => "partiallySorted",
        }
    }
}

impl fmt::Display for DatasetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DatasetShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        DatasetShape::ALL
            .into_iter()
            .find(|shape| shape.key() == s)
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}

/// What to generate: a length and a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub size: usize,
    pub shape: DatasetShape,
}

impl DatasetSpec {
    pub fn new(size: usize, shape: DatasetShape) -> Self {
        Self { size, shape }
    }
}

/// Generates `spec.size` values of the requested shape.
///
/// A size of zero yields an empty vector.
///
/// # Examples
///
/// ```
/// use sortscope::{generate, DatasetShape, DatasetSpec};
///
/// let data = generate(DatasetSpec::new(5, DatasetShape::Reverse));
/// assert_eq!(data, vec![5, 4, 3, 2, 1]);
/// ```
pub fn generate(spec: DatasetSpec) -> Vec<u64> {
    generate_with(spec, &mut rand::rng())
}

/// Like [`generate`], drawing randomness from `rng`.
pub fn generate_with<R: Rng>(spec: DatasetSpec, rng: &mut R) -> Vec<u64> {
    let size = spec.size as u64;
    match spec.shape {
        DatasetShape::Random => (0..spec.size)
            .map(|_| rng.random_range(0..size * 10))
            .collect(),
        DatasetShape::Reverse => (1..=size).rev().collect(),
        DatasetShape::PartiallySorted => {
            let mut data: Vec<u64> = (0..size).collect();
            // Pairs are drawn with replacement, so fewer than 10% of the
            // positions may end up displaced.
            for _ in 0..spec.size / 10 {
                let a = rng.random_range(0..spec.size);
                let b = rng.random_range(0..spec.size);
                data.swap(a, b);
            }
            data
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn partially_sorted_is_a_permutation_of_the_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut data = generate_with(DatasetSpec::new(500, DatasetShape::PartiallySorted), &mut rng);
        let displaced = data.iter().enumerate().filter(|&(i, &v)| i as u64 != v).count();
        assert!(displaced <= 2 * 50);
        data.sort_unstable();
        assert_eq!(data, (0..500).collect::<Vec<u64>>());
    }

    #[test]
    fn shape_keys_parse() {
        for shape in DatasetShape::ALL {
            assert_eq!(shape.key().parse::<DatasetShape>(), Ok(shape));
        }
        assert_eq!(
            "sorted".parse::<DatasetShape>(),
            Err(Error::UnknownShape("sorted".to_string()))
        );
    }
}
