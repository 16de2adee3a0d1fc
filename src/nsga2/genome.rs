//! Fixed-shape binary genome.

use rand::Rng;

/// A genome of `dimension` bit strings, each `bit_length` bits long.
///
/// Bits are stored dimension-major: all loci of dimension 0, then all
/// loci of dimension 1, and so on. The shape is fixed at construction.
///
/// # Examples
///
/// ```
/// use u_nsga2::nsga2::BitGenome;
///
/// let mut genome = BitGenome::new(2, 4);
/// genome.set(1, 0, true);
/// genome.set(1, 3, true);
/// assert_eq!(genome.decode_unsigned(1), Some(0b1001));
/// assert_eq!(genome.decode_unsigned(0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitGenome {
    dimension: usize,
    bit_length: usize,
    bits: Vec<bool>,
}

impl BitGenome {
    /// Creates an all-zero genome.
    pub fn new(dimension: usize, bit_length: usize) -> Self {
        Self {
            dimension,
            bit_length,
            bits: vec![false; dimension * bit_length],
        }
    }

    /// Creates a genome with every bit drawn from a fair coin.
    ///
    /// Bits are drawn in storage order so a seeded stream yields the same
    /// genome every time.
    pub fn random<R: Rng>(dimension: usize, bit_length: usize, rng: &mut R) -> Self {
        let bits = (0..dimension * bit_length)
            .map(|_| rng.random_bool(0.5))
            .collect();
        Self {
            dimension,
            bit_length,
            bits,
        }
    }

    /// Number of bit strings (decision variables).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of bits per decision variable.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Total number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `(dim, locus)`.
    ///
    /// # Panics
    /// Panics if `dim` or `locus` is out of range.
    pub fn get(&self, dim: usize, locus: usize) -> bool {
        self.bits[self.index(dim, locus)]
    }

    /// Sets the bit at `(dim, locus)`.
    ///
    /// # Panics
    /// Panics if `dim` or `locus` is out of range.
    pub fn set(&mut self, dim: usize, locus: usize, bit: bool) {
        let i = self.index(dim, locus);
        self.bits[i] = bit;
    }

    /// Inverts the bit at `(dim, locus)`.
    pub fn flip(&mut self, dim: usize, locus: usize) {
        let i = self.index(dim, locus);
        self.bits[i] = !self.bits[i];
    }

    /// The bits of one decision variable, most significant first.
    pub fn row(&self, dim: usize) -> &[bool] {
        assert!(dim < self.dimension, "dimension {dim} out of range");
        let start = dim * self.bit_length;
        &self.bits[start..start + self.bit_length]
    }

    /// All bits in storage order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Mutable access to all bits in storage order.
    pub fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    /// Decodes one decision variable as an unsigned integer, MSB first.
    ///
    /// Returns `None` if `bit_length` exceeds 64.
    pub fn decode_unsigned(&self, dim: usize) -> Option<u64> {
        if self.bit_length > 64 {
            return None;
        }
        Some(
            self.row(dim)
                .iter()
                .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit)),
        )
    }

    /// Decodes one decision variable onto the closed interval `[lower, upper]`.
    ///
    /// All-zero maps to `lower`, all-one maps to `upper`, intermediate
    /// values are spaced linearly. Works for any `bit_length`; past 53 bits
    /// the low-order bits fall below `f64` precision.
    pub fn decode_real(&self, dim: usize, lower: f64, upper: f64) -> f64 {
        let row = self.row(dim);
        if row.is_empty() {
            return lower;
        }
        // value / 2^len, folded from the least significant bit so no
        // intermediate exceeds 1.
        let fraction = row
            .iter()
            .rev()
            .fold(0.0f64, |acc, &bit| (acc + if bit { 1.0 } else { 0.0 }) / 2.0);
        // 2^len / (2^len - 1); 2^-len underflows to 0 for long rows.
        let scale = 1.0 / (1.0 - row.iter().fold(1.0f64, |acc, _| acc / 2.0));
        lower + (upper - lower) * (fraction * scale).min(1.0)
    }

    fn index(&self, dim: usize, locus: usize) -> usize {
        assert!(dim < self.dimension, "dimension {dim} out of range");
        assert!(locus < self.bit_length, "locus {locus} out of range");
        dim * self.bit_length + locus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_is_all_zero() {
        let g = BitGenome::new(3, 5);
        assert_eq!(g.dimension(), 3);
        assert_eq!(g.bit_length(), 5);
        assert_eq!(g.len(), 15);
        assert!(g.bits().iter().all(|&b| !b));
    }

    #[test]
    fn test_set_get_flip() {
        let mut g = BitGenome::new(2, 3);
        g.set(1, 2, true);
        assert!(g.get(1, 2));
        assert!(!g.get(0, 2));
        g.flip(1, 2);
        assert!(!g.get(1, 2));
        g.flip(0, 0);
        assert!(g.get(0, 0));
    }

    #[test]
    fn test_row_layout() {
        let mut g = BitGenome::new(2, 3);
        g.set(1, 0, true);
        assert_eq!(g.row(0), &[false, false, false]);
        assert_eq!(g.row(1), &[true, false, false]);
    }

    #[test]
    #[should_panic]
    fn test_locus_out_of_range() {
        let g = BitGenome::new(1, 4);
        g.get(0, 4);
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = BitGenome::random(4, 8, &mut StdRng::seed_from_u64(7));
        let b = BitGenome::random(4, 8, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_decode_unsigned() {
        let mut g = BitGenome::new(1, 4);
        g.set(0, 0, true);
        g.set(0, 2, true);
        assert_eq!(g.decode_unsigned(0), Some(0b1010));
    }

    #[test]
    fn test_decode_unsigned_too_wide() {
        let g = BitGenome::new(1, 65);
        assert_eq!(g.decode_unsigned(0), None);
    }

    #[test]
    fn test_decode_real_bounds() {
        let mut g = BitGenome::new(1, 8);
        assert!((g.decode_real(0, -1.0, 1.0) + 1.0).abs() < 1e-12);
        for locus in 0..8 {
            g.set(0, locus, true);
        }
        assert!((g.decode_real(0, -1.0, 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_decode_real_midpoint() {
        // 0b10 of a 2-bit string: 2/3 of the way.
        let mut g = BitGenome::new(1, 2);
        g.set(0, 0, true);
        assert!((g.decode_real(0, 0.0, 3.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_decode_real_long_row_stays_finite() {
        // Wider than the f64 exponent range.
        let mut g = BitGenome::new(2, 1100);
        assert_eq!(g.decode_real(0, -5.0, 5.0), -5.0);

        g.bits_mut()[..1100].iter_mut().for_each(|b| *b = true);
        assert_eq!(g.decode_real(0, -5.0, 5.0), 5.0);

        g.set(0, 0, false);
        let mid = g.decode_real(0, -5.0, 5.0);
        assert!(mid.is_finite());
        assert!(mid.abs() < 1e-9, "got {mid}");
        assert_eq!(g.decode_real(1, -5.0, 5.0), -5.0);
    }
}
