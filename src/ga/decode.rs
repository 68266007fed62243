//! Decoding chromosomes into domain pairs.
//!
//! The two halves of a chromosome are read as unsigned binary integers,
//! most significant bit first, then mapped affinely into the search
//! interval.

// Half lengths are bounded by MAX_CHROMOSOME_LENGTH / 2, well inside f64
#![allow(clippy::cast_precision_loss)]

use crate::ga::chromosome::Chromosome;

/// A decoded candidate point `(x, y)`.
pub type DomainPair = (f64, f64);

/// Largest supported chromosome length.
///
/// Each half is folded into an `f64` accumulator, which represents
/// integers exactly only up to `f64::MANTISSA_DIGITS` bits. Beyond that
/// the `2^(L/2) - 1` scale and the fold itself silently lose precision,
/// so longer chromosomes are rejected at construction.
pub const MAX_CHROMOSOME_LENGTH: usize = (f64::MANTISSA_DIGITS as usize) * 2;

/// Affine mapping from binary chromosome halves into the search interval.
///
/// Immutable once built: `shift` is the lower of the two bounds and
/// `interval` is the bound distance divided by the largest half value.
/// Equal bounds are degenerate but legal; the interval collapses to zero
/// and every chromosome decodes to `(shift, shift)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainScale {
    shift: f64,
    interval: f64,
    half_len: usize,
}

impl DomainScale {
    /// Build the mapping for chromosomes of `length` bits over the closed
    /// interval between `bound_a` and `bound_b` (either order).
    ///
    /// `length` must already be validated as nonzero, even and at most
    /// [`MAX_CHROMOSOME_LENGTH`].
    #[must_use]
    pub fn new(length: usize, bound_a: f64, bound_b: f64) -> Self {
        let half_len = length / 2;
        let binary_max = (half_len as f64).exp2() - 1.0;

        Self {
            shift: bound_a.min(bound_b),
            interval: (bound_b - bound_a).abs() / binary_max,
            half_len,
        }
    }

    /// Lower end of the search interval.
    #[must_use]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Step between adjacent decodable values.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Decode the two halves of `chromosome` into a domain pair.
    ///
    /// Pure: no side effects, deterministic for a given chromosome.
    #[must_use]
    pub fn decode(&self, chromosome: &Chromosome) -> DomainPair {
        let (first, second) = chromosome.bits().split_at(self.half_len);
        (self.map(fold(first)), self.map(fold(second)))
    }

    fn map(&self, value: f64) -> f64 {
        value * self.interval + self.shift
    }
}

/// Fold a bit slice into its unsigned integer value, MSB first.
fn fold(half: &[bool]) -> f64 {
    half.iter()
        .fold(0.0, |acc, &bit| acc * 2.0 + if bit { 1.0 } else { 0.0 })
}
