//! The optimizer engine: construction, reset, generation stepping and
//! best-solution query.
//!
//! The engine owns two generation buffers and an index-aligned weight
//! vector. A step evaluates the current generation, stops on
//! convergence, and otherwise fills the spare buffer by selection,
//! recombines it in place and swaps it in, so no buffer is reallocated
//! across generations.

use crate::error::ConfigError;
use crate::ga::chromosome::Chromosome;
use crate::ga::crossover::{self, CrossoverConfig};
use crate::ga::decode::{DomainPair, DomainScale, MAX_CHROMOSOME_LENGTH};
use crate::ga::fitness;
use crate::ga::selection::{self, SelectionError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;

/// Construction parameters for the optimizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of chromosomes per generation.
    pub population_size: usize,
    /// Bits per chromosome; must be even and at most
    /// [`MAX_CHROMOSOME_LENGTH`].
    pub chromosome_length: usize,
    /// Crossover stage configuration.
    pub crossover: CrossoverConfig,
    /// One end of the search interval (either order).
    pub bound_a: f64,
    /// The other end of the search interval.
    pub bound_b: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 1024,
            chromosome_length: 32,
            crossover: CrossoverConfig::default(),
            bound_a: -10.0,
            bound_b: 10.0,
        }
    }
}

impl GaConfig {
    /// Check the construction contract.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.chromosome_length == 0 {
            return Err(ConfigError::ZeroChromosomeLength);
        }
        if self.chromosome_length % 2 != 0 {
            return Err(ConfigError::OddChromosomeLength {
                length: self.chromosome_length,
            });
        }
        if self.chromosome_length > MAX_CHROMOSOME_LENGTH {
            return Err(ConfigError::ChromosomeLengthTooLarge {
                length: self.chromosome_length,
                max: MAX_CHROMOSOME_LENGTH,
            });
        }
        if !(0.0..=1.0).contains(&self.crossover.rate) {
            return Err(ConfigError::CrossoverRateOutOfRange {
                rate: self.crossover.rate,
            });
        }
        Ok(())
    }
}

/// Binary-encoded genetic optimizer over a two-variable objective.
///
/// All randomness flows through the single engine-owned source, consumed
/// in a fixed order across reset, selection and crossover, so a whole
/// run is reproducible for a fixed seed.
pub struct Optimizer<F, R = SmallRng> {
    parents: Vec<Chromosome>,
    children: Vec<Chromosome>,
    weights: Vec<f64>,
    scale: DomainScale,
    crossover: CrossoverConfig,
    objective: F,
    rng: R,
}

impl<F> Optimizer<F, SmallRng>
where
    F: Fn(DomainPair) -> f64,
{
    /// Construct with a seeded [`SmallRng`].
    ///
    /// # Errors
    ///
    /// See [`Optimizer::new`].
    pub fn with_seed(config: &GaConfig, objective: F, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, objective, SmallRng::seed_from_u64(seed))
    }
}

impl<F, R> Optimizer<F, R>
where
    F: Fn(DomainPair) -> f64,
    R: Rng,
{
    /// Construct from a caller-supplied random source.
    ///
    /// Allocates both generation buffers and the weight vector and
    /// randomly initializes the population, each bit an independent fair
    /// coin flip.
    ///
    /// # Errors
    ///
    /// Rejects a zero population size, a zero, odd or oversized
    /// chromosome length, and a crossover rate outside `[0, 1]`.
    pub fn new(config: &GaConfig, objective: F, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let parents: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(&mut rng, config.chromosome_length))
            .collect();
        let children = parents.clone();

        Ok(Self {
            weights: vec![0.0; config.population_size],
            scale: DomainScale::new(config.chromosome_length, config.bound_a, config.bound_b),
            crossover: config.crossover,
            parents,
            children,
            objective,
            rng,
        })
    }

    /// Redraw every bit of the current generation from a fair coin.
    ///
    /// Returns the engine to the active state after convergence. The
    /// weight vector is left stale until the next [`Optimizer::step`].
    pub fn reset(&mut self) {
        for chromosome in &mut self.parents {
            chromosome.randomize(&mut self.rng);
        }
    }

    /// Advance one generation.
    ///
    /// Refreshes the weight vector and checks convergence first. Once the
    /// population has converged the call returns `Ok(false)` and mutates
    /// nothing, so repeated calls keep returning `Ok(false)`. Otherwise
    /// the next generation is drawn by roulette-wheel selection,
    /// recombined by single-point crossover and swapped in, and the call
    /// returns `Ok(true)`.
    ///
    /// The engine never bounds the number of generations itself; the
    /// caller loops on the returned flag with its own iteration cap.
    ///
    /// # Errors
    ///
    /// Fails when the refreshed weights admit no selection distribution
    /// (all zero, or not a number). The step is abandoned with the
    /// current generation intact.
    pub fn step(&mut self) -> Result<bool, SelectionError> {
        let converged = fitness::evaluate(
            &self.parents,
            &self.scale,
            &self.objective,
            &mut self.weights,
        );
        if converged {
            return Ok(false);
        }

        selection::roulette_fill(
            &self.parents,
            &self.weights,
            &mut self.children,
            &mut self.rng,
        )?;
        crossover::single_point(&mut self.children, &self.crossover, &mut self.rng);
        mem::swap(&mut self.parents, &mut self.children);

        Ok(true)
    }

    /// Best candidate of the current generation.
    ///
    /// "Best" is the first arg-max of the stored selection weights,
    /// which is either the smallest positive objective or the most
    /// negative one in the population; when objective signs are mixed
    /// this is not necessarily the smallest raw value. Returns the
    /// decoded domain pair and the raw objective recomputed on it, not
    /// the transformed weight.
    #[must_use]
    pub fn best_solution(&self) -> (DomainPair, f64) {
        let mut best = 0;
        for (index, weight) in self.weights.iter().enumerate().skip(1) {
            if *weight > self.weights[best] {
                best = index;
            }
        }

        let domain = self.scale.decode(&self.parents[best]);
        (domain, (self.objective)(domain))
    }

    /// The current generation.
    #[must_use]
    pub fn population(&self) -> &[Chromosome] {
        &self.parents
    }

    /// Selection weights from the most recent evaluation.
    ///
    /// All zero until the first step. Refreshed at the start of every
    /// step, so after a mutating step the weights still describe the
    /// generation that was just replaced; once the engine reports
    /// convergence they are aligned with [`Optimizer::population`].
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The decoding scale derived from the configured bounds and length.
    #[must_use]
    pub fn scale(&self) -> &DomainScale {
        &self.scale
    }
}

impl<F, R> fmt::Debug for Optimizer<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optimizer")
            .field("population_size", &self.parents.len())
            .field(
                "chromosome_length",
                &self.parents.first().map_or(0, Chromosome::len),
            )
            .field("scale", &self.scale)
            .field("crossover", &self.crossover)
            .finish_non_exhaustive()
    }
}
