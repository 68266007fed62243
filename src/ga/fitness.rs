//! Fitness transformation and convergence detection.
//!
//! The raw objective value ("range") is never used for selection
//! directly. It is mapped to a non-negative weight first: positive
//! objectives are rewarded for being small, non-positive objectives for
//! being very negative.

// Convergence is defined as exact weight equality
#![allow(clippy::float_cmp)]

use crate::ga::chromosome::Chromosome;
use crate::ga::decode::{DomainPair, DomainScale};

/// Map a raw objective value to a selection weight.
///
/// `weight = 1/range` when the objective is positive, `-range`
/// otherwise, so the weight is non-negative for every finite input. At
/// `range == 0` the negation branch applies and the weight is zero; the
/// reciprocal is never evaluated there.
#[must_use]
pub fn selection_weight(range: f64) -> f64 {
    if range > 0.0 { 1.0 / range } else { -range }
}

/// Evaluate the whole generation and report convergence.
///
/// Decodes every chromosome, applies `objective`, and writes the
/// transformed weight into the index-aligned `weights` slot; `weights`
/// must be at least as long as the population. Returns `true` iff every
/// weight is exactly equal to the first one; an empty population is
/// defined as not converged.
pub fn evaluate<F>(
    population: &[Chromosome],
    scale: &DomainScale,
    objective: F,
    weights: &mut [f64],
) -> bool
where
    F: Fn(DomainPair) -> f64,
{
    if population.is_empty() {
        return false;
    }

    let mut converged = true;
    for (index, chromosome) in population.iter().enumerate() {
        let weight = selection_weight(objective(scale.decode(chromosome)));
        weights[index] = weight;

        if converged && weight != weights[0] {
            converged = false;
        }
    }

    converged
}
