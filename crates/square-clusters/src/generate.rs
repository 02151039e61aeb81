//! Random grid generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use square_clusters_core::{BinaryGrid, GridError};

/// Relative weights of `0` and `1` cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridWeights {
    pub zero: f64,
    pub one: f64,
}

impl Default for GridWeights {
    fn default() -> Self {
        Self { zero: 0.5, one: 0.5 }
    }
}

impl GridWeights {
    /// Mostly-ones weighting used by interactive runs and the perf harness.
    pub const MOSTLY_ONES: Self = Self { zero: 0.2, one: 0.8 };

    /// Probability that a cell is `1`.
    pub fn probability_of_one(&self) -> Result<f64, GenerateError> {
        let valid = |w: f64| w.is_finite() && w >= 0.0;
        let total = self.zero + self.one;
        if !valid(self.zero) || !valid(self.one) || total <= 0.0 {
            return Err(GenerateError::InvalidWeights {
                zero: self.zero,
                one: self.one,
            });
        }
        Ok(self.one / total)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("grid size must be >= 1")]
    InvalidSize,
    #[error("weights must be finite, non-negative and not both zero (zero={zero}, one={one})")]
    InvalidWeights { zero: f64, one: f64 },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Generate a `size`×`size` grid, each cell drawn independently.
pub fn generate_grid<R: Rng + ?Sized>(
    size: usize,
    weights: &GridWeights,
    rng: &mut R,
) -> Result<BinaryGrid, GenerateError> {
    if size == 0 {
        return Err(GenerateError::InvalidSize);
    }
    let p_one = weights.probability_of_one()?;
    Ok(BinaryGrid::from_fn(size, |_, _| rng.gen_bool(p_one))?)
}
