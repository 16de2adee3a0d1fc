//! NSGA-II configuration.
//!
//! [`Nsga2Config`] holds all parameters that control the evolutionary loop.

use super::error::ConfigError;

/// Configuration for NSGA-II.
///
/// Controls population and offspring sizes, genome shape, number of
/// objectives, generation count, mutation rate and seeding.
///
/// # Defaults
///
/// ```
/// use u_nsga2::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.offspring_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_nsga2::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default()
///     .with_population_size(40)
///     .with_offspring_size(40)
///     .with_genome_shape(2, 12)
///     .with_mutation_rate(0.02)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of candidates kept from one generation to the next.
    pub population_size: usize,

    /// Number of offspring created per generation. Must be even: crossover
    /// always yields pairs.
    pub offspring_size: usize,

    /// Number of decision variables (bit strings) per genome.
    pub dimension: usize,

    /// Bits per decision variable.
    pub bit_length: usize,

    /// Length of every objective vector returned by the problem.
    pub objective_count: usize,

    /// Total number of generations, counting the initial population.
    ///
    /// The loop body runs `max_generations - 1` times, so `1` returns the
    /// initial population unchanged.
    pub max_generations: usize,

    /// Per-bit flip probability handed to
    /// [`BinaryProblem::mutate`](super::BinaryProblem::mutate) (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the operating system.
    pub seed: Option<u64>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            offspring_size: 100,
            dimension: 1,
            bit_length: 16,
            objective_count: 2,
            max_generations: 100,
            mutation_rate: 0.01,
            seed: None,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of offspring per generation.
    pub fn with_offspring_size(mut self, n: usize) -> Self {
        self.offspring_size = n;
        self
    }

    /// Sets the number of decision variables and bits per variable.
    pub fn with_genome_shape(mut self, dimension: usize, bit_length: usize) -> Self {
        self.dimension = dimension;
        self.bit_length = bit_length;
        self
    }

    /// Sets the number of objectives.
    pub fn with_objective_count(mut self, n: usize) -> Self {
        self.objective_count = n;
        self
    }

    /// Sets the total number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the mutation rate to one expected flip per genome,
    /// `1 / (dimension * bit_length)`.
    ///
    /// Call after [`with_genome_shape`](Self::with_genome_shape).
    pub fn with_inverse_length_mutation(mut self) -> Self {
        let bits = self.dimension * self.bit_length;
        if bits > 0 {
            self.mutation_rate = 1.0 / bits as f64;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.offspring_size == 0 {
            return Err(ConfigError::EmptyOffspring);
        }
        if self.offspring_size % 2 != 0 {
            return Err(ConfigError::OddOffspring(self.offspring_size));
        }
        if self.dimension == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.bit_length == 0 {
            return Err(ConfigError::ZeroBitLength);
        }
        if self.objective_count == 0 {
            return Err(ConfigError::ZeroObjectives);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
