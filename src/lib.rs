// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Bitga: a binary-encoded genetic algorithm for two-variable
//! minimization.
//!
//! Candidate solutions are fixed-length bit strings whose halves decode
//! into an `(x, y)` pair. A caller-supplied objective scores each pair;
//! the population evolves by fitness-proportionate selection and
//! single-point crossover until every individual carries the same
//! selection weight, which is the engine's sole termination signal.
//!
//! The engine is synchronous and single-threaded, owns one random
//! source, and exposes only an in-process call surface: construct,
//! [`Optimizer::reset`], [`Optimizer::step`] and
//! [`Optimizer::best_solution`]. Bounding the number of generations is
//! the caller's job.

pub mod error;
pub mod ga;

pub use error::ConfigError;
pub use ga::{
    Chromosome, CrossoverConfig, DomainPair, DomainScale, GaConfig, Optimizer, SelectionError,
    MAX_CHROMOSOME_LENGTH,
};
