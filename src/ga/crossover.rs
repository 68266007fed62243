//! Single-point crossover over adjacent pairs.
//!
//! Crossover is the only source of new bit patterns in the evolution
//! loop: paired chromosomes exchange a randomly chosen bit prefix.

use crate::ga::chromosome::Chromosome;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for the crossover stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CrossoverConfig {
    /// Probability that a given pair is recombined at all.
    pub rate: f64,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self { rate: 1.0 }
    }
}

/// Recombine the generation in place.
///
/// Chromosomes are processed in disjoint adjacent pairs (0&1, 2&3, ...);
/// a trailing unpaired chromosome is left untouched. For each pair, one
/// Bernoulli trial at the configured rate decides whether the pair is
/// recombined; on success a cut point is drawn uniformly from
/// `0..=length` (both ends are no-op swaps) and the bit prefixes
/// `[0, point)` are exchanged. Pairs are visited left to right and draws
/// are consumed in that fixed order, so a run is reproducible for a
/// fixed seed.
pub fn single_point<R: Rng>(generation: &mut [Chromosome], config: &CrossoverConfig, rng: &mut R) {
    for pair in generation.chunks_exact_mut(2) {
        if !rng.gen_bool(config.rate) {
            continue;
        }

        let [first, second] = pair else { continue };
        let point = rng.gen_range(0..=first.len());
        first.swap_prefix(second, point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_rate_zero_passes_generation_through() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut generation: Vec<Chromosome> =
            (0..6).map(|_| Chromosome::random(&mut rng, 16)).collect();
        let before = generation.clone();

        single_point(&mut generation, &CrossoverConfig { rate: 0.0 }, &mut rng);

        assert_eq!(generation, before);
    }

    #[test]
    fn test_swapped_pair_keeps_positionwise_bits() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut generation = vec![
            Chromosome::from_bits(vec![false; 16]),
            Chromosome::from_bits(vec![true; 16]),
        ];

        single_point(&mut generation, &CrossoverConfig::default(), &mut rng);

        // Whatever the cut point, position i still holds one zero and one
        // one across the pair, and the result is a prefix/suffix split.
        let (a, b) = (generation[0].bits(), generation[1].bits());
        for i in 0..16 {
            assert_ne!(a[i], b[i]);
        }
        let point = a.iter().take_while(|&&bit| bit).count();
        assert!(a[point..].iter().all(|&bit| !bit));
        assert!(b[point..].iter().all(|&bit| bit));
    }

    #[test]
    fn test_trailing_unpaired_chromosome_is_untouched() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut generation: Vec<Chromosome> =
            (0..5).map(|_| Chromosome::random(&mut rng, 8)).collect();
        let last = generation[4].clone();

        single_point(&mut generation, &CrossoverConfig::default(), &mut rng);

        assert_eq!(generation[4], last);
    }

    #[test]
    fn test_crossover_is_reproducible() {
        let mut rng = SmallRng::seed_from_u64(5);
        let generation: Vec<Chromosome> =
            (0..8).map(|_| Chromosome::random(&mut rng, 32)).collect();

        let mut first = generation.clone();
        let mut second = generation;

        let config = CrossoverConfig { rate: 0.7 };
        let mut rng_a = SmallRng::seed_from_u64(11);
        single_point(&mut first, &config, &mut rng_a);
        let mut rng_b = SmallRng::seed_from_u64(11);
        single_point(&mut second, &config, &mut rng_b);

        assert_eq!(first, second);
    }
}
