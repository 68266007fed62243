//! Bit-string chromosome representation.
//!
//! A chromosome is a fixed-length ordered sequence of bits. The two halves
//! encode the two coordinates of a candidate point; decoding lives in
//! [`super::decode`]. The representation supports the two operations the
//! evolution loop needs without allocating: whole-chromosome copy and
//! prefix exchange.

use rand::Rng;
use std::fmt;

/// Fixed-length bit string encoding one candidate solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Create a chromosome of `length` bits, each drawn from a fair coin.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, length: usize) -> Self {
        let mut chromosome = Self {
            bits: vec![false; length],
        };
        chromosome.randomize(rng);
        chromosome
    }

    /// Create a chromosome from an explicit bit pattern.
    #[must_use]
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Redraw every bit from an independent fair coin flip.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for bit in &mut self.bits {
            *bit = rng.gen_bool(0.5);
        }
    }

    /// Number of bits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the chromosome carries no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The raw bits, most significant first within each half.
    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Overwrite this chromosome with a verbatim copy of `other`.
    ///
    /// Reuses the existing buffer. Both chromosomes must have the same
    /// length; the evolution loop never mixes lengths.
    pub fn copy_from(&mut self, other: &Self) {
        self.bits.copy_from_slice(&other.bits);
    }

    /// Exchange the bits `[0, point)` with `other`, in place.
    ///
    /// `point` may be `0` or the full length; both are no-op swaps.
    pub fn swap_prefix(&mut self, other: &mut Self, point: usize) {
        self.bits[..point].swap_with_slice(&mut other.bits[..point]);
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_has_requested_length() {
        let mut rng = SmallRng::seed_from_u64(42);
        let chromosome = Chromosome::random(&mut rng, 32);
        assert_eq!(chromosome.len(), 32);
    }

    #[test]
    fn test_randomize_is_reproducible() {
        let mut a = Chromosome::from_bits(vec![false; 64]);
        let mut b = Chromosome::from_bits(vec![true; 64]);

        let mut rng = SmallRng::seed_from_u64(7);
        a.randomize(&mut rng);
        let mut rng = SmallRng::seed_from_u64(7);
        b.randomize(&mut rng);

        assert_eq!(a, b);
    }

    #[test]
    fn test_copy_from_is_verbatim() {
        let mut rng = SmallRng::seed_from_u64(1);
        let source = Chromosome::random(&mut rng, 16);
        let mut target = Chromosome::from_bits(vec![false; 16]);

        target.copy_from(&source);
        assert_eq!(target, source);
    }

    #[test]
    fn test_swap_prefix_exchanges_exactly_the_prefix() {
        let mut a = Chromosome::from_bits(vec![false; 8]);
        let mut b = Chromosome::from_bits(vec![true; 8]);

        a.swap_prefix(&mut b, 3);

        assert_eq!(a.bits(), &[true, true, true, false, false, false, false, false]);
        assert_eq!(b.bits(), &[false, false, false, true, true, true, true, true]);
    }

    #[test]
    fn test_swap_prefix_bounds() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut a = Chromosome::random(&mut rng, 8);
        let mut b = Chromosome::random(&mut rng, 8);
        let (a0, b0) = (a.clone(), b.clone());

        // Point 0 is an identity swap.
        a.swap_prefix(&mut b, 0);
        assert_eq!((&a, &b), (&a0, &b0));

        // The full length exchanges the chromosomes wholesale.
        a.swap_prefix(&mut b, 8);
        assert_eq!(a, b0);
        assert_eq!(b, a0);
    }

    #[test]
    fn test_display_renders_bits() {
        let chromosome = Chromosome::from_bits(vec![true, false, true, true]);
        assert_eq!(chromosome.to_string(), "1011");
    }
}
