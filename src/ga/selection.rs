//! Fitness-proportionate (roulette-wheel) selection.
//!
//! Each slot of the next generation is filled with a verbatim copy of a
//! parent drawn with replacement, with probability proportional to the
//! parent's selection weight. No new genetic material is created here.

use crate::ga::chromosome::Chromosome;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;
use std::fmt;

/// Error from building the selection distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionError {
    /// The weight vector admits no valid distribution: every weight is
    /// zero, or some weight is negative or not a number.
    DegenerateWeights(WeightedError),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::DegenerateWeights(e) => {
                write!(f, "selection weights admit no distribution: {e}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

impl From<WeightedError> for SelectionError {
    fn from(e: WeightedError) -> Self {
        SelectionError::DegenerateWeights(e)
    }
}

/// Fill `children` by roulette-wheel sampling from `parents`.
///
/// `weights` must be index-aligned with `parents`; it does not need to
/// sum to one. Parents with weight zero are never drawn. Sampling is with
/// replacement and consumes one draw from `rng` per child slot, left to
/// right.
///
/// # Errors
///
/// Fails fast when the weight vector is all zero (or contains an invalid
/// entry), which would make the sampling distribution undefined.
pub fn roulette_fill<R: Rng>(
    parents: &[Chromosome],
    weights: &[f64],
    children: &mut [Chromosome],
    rng: &mut R,
) -> Result<(), SelectionError> {
    let distribution = WeightedIndex::new(weights)?;

    for child in children.iter_mut() {
        child.copy_from(&parents[distribution.sample(rng)]);
    }

    Ok(())
}
