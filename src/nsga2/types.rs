//! Core type and trait definitions for NSGA-II.
//!
//! [`Candidate`] is the value type that flows through every stage of the
//! loop. [`BinaryProblem`] and [`Dominance`] define the contract between
//! the generic engine and a domain-specific problem.

use super::genome::BitGenome;
use super::runner::GenerationStats;
use super::variation::bit_flip_mutation;
use rand::Rng;

/// A candidate solution: genome, objective vector, Pareto rank and
/// crowding distance.
///
/// Candidates are plain owned values. Variation produces new candidates
/// rather than modifying parents, and the population, offspring batch and
/// merged family never share mutable state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    genome: BitGenome,
    objectives: Vec<f64>,
    rank: usize,
    crowding_distance: f64,
}

impl Candidate {
    /// Creates an unranked candidate (`rank == 0`, distance `0.0`).
    pub fn new(genome: BitGenome, objectives: Vec<f64>) -> Self {
        Self {
            genome,
            objectives,
            rank: 0,
            crowding_distance: 0.0,
        }
    }

    pub fn genome(&self) -> &BitGenome {
        &self.genome
    }

    /// The objective vector `f`.
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    /// Pareto rank, 1 being the best front. 0 means not yet ranked.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }

    pub fn crowding_distance(&self) -> f64 {
        self.crowding_distance
    }

    pub fn set_crowding_distance(&mut self, distance: f64) {
        self.crowding_distance = distance;
    }
}

/// Strict Pareto dominance between two objective vectors.
///
/// Implementations must be irreflexive and asymmetric: `dominates(a, a)`
/// is false, and `dominates(a, b)` implies `!dominates(b, a)`.
pub trait Dominance: Sync {
    /// Returns `true` if `a` strictly dominates `b`.
    fn dominates(&self, a: &[f64], b: &[f64]) -> bool;
}

/// Pareto dominance where every objective is minimized.
///
/// `a` dominates `b` if it is no greater in every objective and strictly
/// less in at least one.
///
/// ```
/// use u_nsga2::nsga2::{Dominance, Minimize};
///
/// assert!(Minimize.dominates(&[1.0, 2.0], &[1.0, 3.0]));
/// assert!(!Minimize.dominates(&[1.0, 2.0], &[2.0, 1.0]));
/// assert!(!Minimize.dominates(&[1.0, 2.0], &[1.0, 2.0]));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimize;

impl Dominance for Minimize {
    fn dominates(&self, a: &[f64], b: &[f64]) -> bool {
        let mut strictly_better = false;
        for (&va, &vb) in a.iter().zip(b.iter()) {
            if va > vb {
                return false;
            }
            if va < vb {
                strictly_better = true;
            }
        }
        strictly_better
    }
}

/// Pareto dominance where every objective is maximized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Maximize;

impl Dominance for Maximize {
    fn dominates(&self, a: &[f64], b: &[f64]) -> bool {
        Minimize.dominates(b, a)
    }
}

/// Defines a multi-objective problem over bit-string genomes.
///
/// This is the trait users implement to plug their representation into
/// the generic NSGA-II engine. It covers:
///
/// 1. **Evaluation**: How a genome maps to its objective vector (required)
/// 2. **Initialization**: How to randomize a fresh genome
/// 3. **Mutation**: How to perturb a genome after crossover
/// 4. **Dominance**: Which objective vectors dominate which
///
/// # Randomness
///
/// Every stochastic hook receives the run's single random stream. Drawing
/// from anything else breaks seed reproducibility.
///
/// # Example
///
/// ```
/// use u_nsga2::nsga2::{BinaryProblem, BitGenome};
///
/// /// Schaffer's problem N.1 on x in [-10, 10].
/// struct Schaffer;
///
/// impl BinaryProblem for Schaffer {
///     fn evaluate(&self, genome: &BitGenome) -> Vec<f64> {
///         let x = genome.decode_real(0, -10.0, 10.0);
///         vec![x * x, (x - 2.0) * (x - 2.0)]
///     }
/// }
/// ```
pub trait BinaryProblem: Send + Sync {
    /// Computes the objective vector of a genome.
    ///
    /// The returned vector must have exactly
    /// [`objective_count`](super::Nsga2Config::objective_count) entries.
    fn evaluate(&self, genome: &BitGenome) -> Vec<f64>;

    /// Randomizes a freshly allocated genome.
    ///
    /// The default draws every bit from a fair coin in storage order.
    fn initialize<R: Rng>(&self, genome: &mut BitGenome, rng: &mut R) {
        for bit in genome.bits_mut() {
            *bit = rng.random_bool(0.5);
        }
    }

    /// Perturbs a genome produced by crossover.
    ///
    /// The default flips each bit independently with probability
    /// `mutation_rate`.
    fn mutate<R: Rng>(&self, genome: &mut BitGenome, mutation_rate: f64, rng: &mut R) {
        bit_flip_mutation(genome, mutation_rate, rng);
    }

    /// Returns `true` if objective vector `a` strictly dominates `b`.
    ///
    /// The default minimizes every objective ([`Minimize`]).
    fn dominates(&self, a: &[f64], b: &[f64]) -> bool {
        Minimize.dominates(a, b)
    }

    /// Called after each generation's selection.
    ///
    /// Useful for logging or progress reporting. The default is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimize_dominance() {
        let a = [1.0, 0.1];
        let b = [0.1, 0.1];
        let c = [0.1, 1.0];

        assert!(!Minimize.dominates(&a, &a));
        assert!(!Minimize.dominates(&a, &b));
        assert!(!Minimize.dominates(&a, &c));

        assert!(Minimize.dominates(&b, &a));
        assert!(!Minimize.dominates(&b, &b));
        assert!(Minimize.dominates(&b, &c));

        assert!(!Minimize.dominates(&c, &a));
        assert!(!Minimize.dominates(&c, &b));
        assert!(!Minimize.dominates(&c, &c));
    }

    #[test]
    fn test_maximize_dominance() {
        assert!(Maximize.dominates(&[2.0, 2.0], &[1.0, 2.0]));
        assert!(!Maximize.dominates(&[1.0, 2.0], &[2.0, 2.0]));
        assert!(!Maximize.dominates(&[1.0, 2.0], &[1.0, 2.0]));
        assert!(!Maximize.dominates(&[1.0, 3.0], &[2.0, 2.0]));
    }

    #[test]
    fn test_candidate_starts_unranked() {
        let c = Candidate::new(BitGenome::new(1, 2), vec![1.0, 2.0]);
        assert_eq!(c.rank(), 0);
        assert_eq!(c.crowding_distance(), 0.0);
        assert_eq!(c.objectives(), &[1.0, 2.0]);
    }

    struct Constant;

    impl BinaryProblem for Constant {
        fn evaluate(&self, _genome: &BitGenome) -> Vec<f64> {
            vec![0.0]
        }
    }

    #[test]
    fn test_default_mutate_with_zero_rate_is_identity() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(1);
        let mut genome = BitGenome::random(2, 8, &mut rng);
        let before = genome.clone();
        Constant.mutate(&mut genome, 0.0, &mut rng);
        assert_eq!(genome, before);
    }
}
