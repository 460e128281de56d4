use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Result, SortVizError};

/// Inclusive range of values the generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    pub const DEFAULT: ValueRange = ValueRange { min: 10, max: 100 };

    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(SortVizError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Generates `size` uniformly distributed values in `[10, 100]` using the
/// thread-local RNG. Every call yields a fresh array.
pub fn generate(size: usize) -> Vec<i32> {
    generate_with(&mut rand::rng(), size, ValueRange::DEFAULT)
}

/// Generates `size` values from `range` using the provided RNG. Seeding the RNG
/// makes the output reproducible.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, size: usize, range: ValueRange) -> Vec<i32> {
    (0..size)
        .map(|_| rng.random_range(range.min..=range.max))
        .collect()
}
