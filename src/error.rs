//! Configuration errors for optimizer construction.

use std::fmt;

/// Construction parameters rejected by the optimizer.
///
/// Every variant is fatal: construction fails synchronously and nothing
/// is allocated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Population size was zero.
    ZeroPopulation,
    /// Chromosome length was zero.
    ZeroChromosomeLength,
    /// Chromosome length was odd; the decoder splits chromosomes into two
    /// equal halves, so odd lengths are rejected outright.
    OddChromosomeLength {
        /// The rejected length.
        length: usize,
    },
    /// Chromosome length exceeds the decodable ceiling.
    ///
    /// Each half is folded into an `f64`, which stays exact only up to
    /// `f64::MANTISSA_DIGITS` bits per half.
    ChromosomeLengthTooLarge {
        /// The rejected length.
        length: usize,
        /// Largest supported length.
        max: usize,
    },
    /// Crossover rate outside `[0, 1]`.
    CrossoverRateOutOfRange {
        /// The rejected rate.
        rate: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroPopulation => write!(f, "population size must be at least 1"),
            ConfigError::ZeroChromosomeLength => {
                write!(f, "chromosome length must be at least 2")
            }
            ConfigError::OddChromosomeLength { length } => {
                write!(f, "chromosome length must be even, got {length}")
            }
            ConfigError::ChromosomeLengthTooLarge { length, max } => {
                write!(f, "chromosome length {length} exceeds the maximum of {max}")
            }
            ConfigError::CrossoverRateOutOfRange { rate } => {
                write!(f, "crossover rate must be within [0, 1], got {rate}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
