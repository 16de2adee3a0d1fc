//! NSGA-II evolutionary loop execution.
//!
//! [`Nsga2Runner`] orchestrates the complete evolutionary process:
//! initialization → offspring → merge → non-dominated sort → crowded
//! selection → repeat.

use super::config::Nsga2Config;
use super::error::Nsga2Error;
use super::genome::BitGenome;
use super::ranking::non_dominated_sort;
use super::selection::crowded_selection;
use super::types::{BinaryProblem, Candidate, Dominance};
use super::variation::cross;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-generation summary, taken from the ranked family before selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number, starting at 1 for the first loop iteration.
    pub generation: usize,

    /// Number of Pareto fronts in the merged family.
    pub front_count: usize,

    /// Size of the first (non-dominated) front of the merged family.
    pub first_front_size: usize,
}

impl GenerationStats {
    fn from_ranked(generation: usize, ranked: &[Candidate]) -> Self {
        Self {
            generation,
            front_count: ranked.last().map_or(0, |c| c.rank()),
            first_front_size: ranked.iter().take_while(|c| c.rank() == 1).count(),
        }
    }
}

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Result {
    /// The final population, exactly `population_size` candidates.
    ///
    /// Rank and crowding distance are whatever the last selection left
    /// behind; use [`pareto_front`](Self::pareto_front) for a fresh ranking.
    pub population: Vec<Candidate>,

    /// Total number of generations executed, counting the initial one.
    pub generations: usize,

    /// One entry per loop iteration.
    pub history: Vec<GenerationStats>,
}

impl Nsga2Result {
    /// The non-dominated members of the final population, freshly ranked.
    pub fn pareto_front<P: BinaryProblem>(&self, problem: &P) -> Vec<Candidate> {
        let mut ranked = non_dominated_sort(self.population.clone(), &ProblemDominance(problem));
        ranked.retain(|c| c.rank() == 1);
        ranked
    }
}

/// Executes the NSGA-II loop.
///
/// # Usage
///
/// ```
/// use u_nsga2::nsga2::{BinaryProblem, BitGenome, Nsga2Config, Nsga2Runner};
///
/// struct Schaffer;
///
/// impl BinaryProblem for Schaffer {
///     fn evaluate(&self, genome: &BitGenome) -> Vec<f64> {
///         let x = genome.decode_real(0, -10.0, 10.0);
///         vec![x * x, (x - 2.0) * (x - 2.0)]
///     }
/// }
///
/// let config = Nsga2Config::default()
///     .with_population_size(20)
///     .with_offspring_size(20)
///     .with_max_generations(10)
///     .with_seed(42);
/// let result = Nsga2Runner::run(&Schaffer, &config).unwrap();
/// assert_eq!(result.population.len(), 20);
/// ```
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs NSGA-II with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`Nsga2Error::Config`] for an invalid configuration,
    /// [`Nsga2Error::ObjectiveCount`] if the problem returns an objective
    /// vector of the wrong length and [`Nsga2Error::NonFiniteObjective`] if
    /// any objective value is NaN or infinite.
    pub fn run<P: BinaryProblem>(
        problem: &P,
        config: &Nsga2Config,
    ) -> Result<Nsga2Result, Nsga2Error> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs NSGA-II drawing every random decision from `rng`.
    ///
    /// Initialization, parent picks, crossover and mutation all consume the
    /// same stream in a fixed order, so a given generator state always
    /// produces the same result. `config.seed` is ignored.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_with_rng<P: BinaryProblem, R: Rng>(
        problem: &P,
        config: &Nsga2Config,
        rng: &mut R,
    ) -> Result<Nsga2Result, Nsga2Error> {
        config.validate()?;

        info!(
            "NSGA-II start: population={} offspring={} genome={}x{} objectives={} generations={} mutation_rate={}",
            config.population_size,
            config.offspring_size,
            config.dimension,
            config.bit_length,
            config.objective_count,
            config.max_generations,
            config.mutation_rate
        );

        let dominance = ProblemDominance(problem);

        let mut population = (0..config.population_size)
            .map(|_| {
                let mut genome = BitGenome::new(config.dimension, config.bit_length);
                problem.initialize(&mut genome, rng);
                evaluate(problem, config, genome)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut history = Vec::with_capacity(config.max_generations - 1);

        for generation in 1..config.max_generations {
            let offspring = generate_offspring(problem, config, &population, rng)?;

            let mut family = population;
            family.extend(offspring);

            let ranked = non_dominated_sort(family, &dominance);
            let stats = GenerationStats::from_ranked(generation, &ranked);
            population = crowded_selection(ranked, config.population_size);

            debug!(
                "generation {}: {} fronts, first front {}",
                stats.generation, stats.front_count, stats.first_front_size
            );
            problem.on_generation(&stats);
            history.push(stats);
        }

        info!("NSGA-II done after {} generations", config.max_generations);

        Ok(Nsga2Result {
            population,
            generations: config.max_generations,
            history,
        })
    }
}

/// Routes the ranker's dominance queries to the problem.
struct ProblemDominance<'a, P>(&'a P);

impl<P: BinaryProblem> Dominance for ProblemDominance<'_, P> {
    fn dominates(&self, a: &[f64], b: &[f64]) -> bool {
        self.0.dominates(a, b)
    }
}

/// Creates `offspring_size` children from uniformly drawn parent pairs
/// (with replacement).
fn generate_offspring<P: BinaryProblem, R: Rng>(
    problem: &P,
    config: &Nsga2Config,
    population: &[Candidate],
    rng: &mut R,
) -> Result<Vec<Candidate>, Nsga2Error> {
    let mut offspring = Vec::with_capacity(config.offspring_size);
    for _ in 0..config.offspring_size / 2 {
        let a = rng.random_range(0..population.len());
        let b = rng.random_range(0..population.len());
        let (child_a, child_b) = cross(
            problem,
            population[a].genome(),
            population[b].genome(),
            config.mutation_rate,
            rng,
        );
        offspring.push(evaluate(problem, config, child_a)?);
        offspring.push(evaluate(problem, config, child_b)?);
    }
    Ok(offspring)
}

fn evaluate<P: BinaryProblem>(
    problem: &P,
    config: &Nsga2Config,
    genome: BitGenome,
) -> Result<Candidate, Nsga2Error> {
    let objectives = problem.evaluate(&genome);
    if objectives.len() != config.objective_count {
        return Err(Nsga2Error::ObjectiveCount {
            expected: config.objective_count,
            actual: objectives.len(),
        });
    }
    if let Some(index) = objectives.iter().position(|v| !v.is_finite()) {
        return Err(Nsga2Error::NonFiniteObjective {
            index,
            value: objectives[index],
        });
    }
    Ok(Candidate::new(genome, objectives))
}

// ============================================================================
// Tests
// ============================================================================
