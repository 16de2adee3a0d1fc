//! Variation operators for bit-string genomes.
//!
//! # Crossover
//!
//! - [`uniform_crossover`]: Syswerda (1989) — every locus swapped with
//!   probability 1/2
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: independent per-bit flip
//!
//! [`cross`] chains the two the way the NSGA-II loop uses them.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective GA: NSGA-II"

use super::genome::BitGenome;
use super::types::BinaryProblem;
use rand::Rng;

/// Uniform crossover.
///
/// Children start as copies of the parents. For every bit position across
/// every dimension, the two children's bits are swapped with probability
/// 1/2. One draw is consumed per bit, dimension-major.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different shapes.
pub fn uniform_crossover<R: Rng>(
    parent_a: &BitGenome,
    parent_b: &BitGenome,
    rng: &mut R,
) -> (BitGenome, BitGenome) {
    assert_eq!(
        (parent_a.dimension(), parent_a.bit_length()),
        (parent_b.dimension(), parent_b.bit_length()),
        "parents must have equal shape"
    );

    let mut child_a = parent_a.clone();
    let mut child_b = parent_b.clone();

    for (a, b) in child_a.bits_mut().iter_mut().zip(child_b.bits_mut()) {
        if rng.random_bool(0.5) {
            std::mem::swap(a, b);
        }
    }

    (child_a, child_b)
}

/// Flips each bit independently with probability `rate`.
///
/// A non-positive rate is a no-op and draws nothing from `rng`.
///
/// # Panics
/// Panics if `rate` is greater than 1 or NaN.
pub fn bit_flip_mutation<R: Rng>(genome: &mut BitGenome, rate: f64, rng: &mut R) {
    if rate <= 0.0 {
        return;
    }
    for bit in genome.bits_mut() {
        if rng.random_bool(rate) {
            *bit = !*bit;
        }
    }
}

/// Produces two children from two parents: uniform crossover, then the
/// problem's mutation applied to the first child and then the second.
pub fn cross<P: BinaryProblem, R: Rng>(
    problem: &P,
    parent_a: &BitGenome,
    parent_b: &BitGenome,
    mutation_rate: f64,
    rng: &mut R,
) -> (BitGenome, BitGenome) {
    let (mut child_a, mut child_b) = uniform_crossover(parent_a, parent_b, rng);
    problem.mutate(&mut child_a, mutation_rate, rng);
    problem.mutate(&mut child_b, mutation_rate, rng);
    (child_a, child_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ones(dimension: usize, bit_length: usize) -> BitGenome {
        let mut g = BitGenome::new(dimension, bit_length);
        g.bits_mut().iter_mut().for_each(|b| *b = true);
        g
    }

    #[test]
    fn test_uniform_crossover_is_recombination() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = BitGenome::random(3, 16, &mut rng);
        let b = BitGenome::random(3, 16, &mut rng);
        let (ca, cb) = uniform_crossover(&a, &b, &mut rng);

        for i in 0..a.len() {
            let parents = (a.bits()[i], b.bits()[i]);
            let children = (ca.bits()[i], cb.bits()[i]);
            assert!(
                children == parents || children == (parents.1, parents.0),
                "locus {i} is not a swap of the parents"
            );
        }
    }

    #[test]
    fn test_uniform_crossover_complementary_parents() {
        // Zeros vs ones: each locus ends up with exactly one set bit.
        let mut rng = StdRng::seed_from_u64(3);
        let a = BitGenome::new(2, 32);
        let b = ones(2, 32);
        let (ca, cb) = uniform_crossover(&a, &b, &mut rng);
        for i in 0..a.len() {
            assert_ne!(ca.bits()[i], cb.bits()[i]);
        }
        let swapped = ca.bits().iter().filter(|&&x| x).count();
        assert!(swapped > 0 && swapped < 64, "expected a mix, got {swapped}");
    }

    #[test]
    fn test_uniform_crossover_does_not_touch_parents() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = BitGenome::new(1, 8);
        let b = ones(1, 8);
        let _ = uniform_crossover(&a, &b, &mut rng);
        assert!(a.bits().iter().all(|&x| !x));
        assert!(b.bits().iter().all(|&x| x));
    }

    #[test]
    #[should_panic(expected = "parents must have equal shape")]
    fn test_uniform_crossover_shape_mismatch() {
        let mut rng = StdRng::seed_from_u64(0);
        uniform_crossover(&BitGenome::new(1, 4), &BitGenome::new(2, 2), &mut rng);
    }

    #[test]
    fn test_bit_flip_rate_one_inverts() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut g = BitGenome::new(2, 5);
        bit_flip_mutation(&mut g, 1.0, &mut rng);
        assert!(g.bits().iter().all(|&x| x));
    }

    #[test]
    fn test_bit_flip_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut g = ones(2, 5);
        bit_flip_mutation(&mut g, 0.0, &mut rng);
        assert_eq!(g, ones(2, 5));
    }

    #[test]
    fn test_bit_flip_rate_roughly_respected() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut g = BitGenome::new(1, 10_000);
        bit_flip_mutation(&mut g, 0.1, &mut rng);
        let flipped = g.bits().iter().filter(|&&x| x).count();
        assert!(
            (800..1200).contains(&flipped),
            "expected ~1000 flips, got {flipped}"
        );
    }
}
