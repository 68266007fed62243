//! Binary-encoded genetic algorithm for two-variable minimization.
//!
//! The optimizer evolves a population of fixed-length bit strings. Each
//! chromosome decodes into an `(x, y)` pair, a caller-supplied objective
//! scores the pair, and the population is resampled generation by
//! generation until every individual carries the same selection weight.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │         Optimizer (engine)          │
//! ├─────────────────────────────────────┤
//! │  Roulette wheel │ Single-point      │
//! │  selection      │ crossover         │
//! ├─────────────────────────────────────┤
//! │  Fitness transform / convergence    │
//! ├─────────────────────────────────────┤
//! │  Chromosome decode → (x, y)         │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use bitga::{GaConfig, Optimizer};
//!
//! let config = GaConfig {
//!     population_size: 64,
//!     chromosome_length: 16,
//!     ..GaConfig::default()
//! };
//! let mut ga = Optimizer::with_seed(&config, |(x, y)| x * x + y * y, 7)?;
//! for _ in 0..1_000 {
//!     if !ga.step()? {
//!         break;
//!     }
//! }
//! let ((x, y), minimum) = ga.best_solution();
//! assert!(minimum <= x * x + y * y + 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod chromosome;
mod crossover;
mod decode;
mod engine;
mod fitness;
mod selection;

pub use chromosome::Chromosome;
pub use crossover::{single_point, CrossoverConfig};
pub use decode::{DomainPair, DomainScale, MAX_CHROMOSOME_LENGTH};
pub use engine::{GaConfig, Optimizer};
pub use fitness::{evaluate, selection_weight};
pub use selection::{roulette_fill, SelectionError};
