//! Error types for NSGA-II runs.

use thiserror::Error;

/// A rejected [`Nsga2Config`](super::Nsga2Config).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("offspring_size must be at least 1")]
    EmptyOffspring,

    /// Crossover always yields pairs.
    #[error("offspring_size must be even, got {0}")]
    OddOffspring(usize),

    #[error("dimension must be at least 1")]
    ZeroDimension,

    #[error("bit_length must be at least 1")]
    ZeroBitLength,

    #[error("objective_count must be at least 1")]
    ZeroObjectives,

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),
}

/// Failure of an NSGA-II run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Nsga2Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The problem returned an objective vector of the wrong length.
    #[error("problem returned {actual} objectives, expected {expected}")]
    ObjectiveCount { expected: usize, actual: usize },

    /// The problem returned NaN or an infinity.
    #[error("problem returned non-finite objective {value} at index {index}")]
    NonFiniteObjective { index: usize, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: Nsga2Error = ConfigError::OddOffspring(3).into();
        assert_eq!(err, Nsga2Error::Config(ConfigError::OddOffspring(3)));
        assert_eq!(
            err.to_string(),
            "invalid configuration: offspring_size must be even, got 3"
        );
    }

    #[test]
    fn test_objective_count_message() {
        let err = Nsga2Error::ObjectiveCount {
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "problem returned 3 objectives, expected 2");
    }

    #[test]
    fn test_non_finite_objective_message() {
        let err = Nsga2Error::NonFiniteObjective {
            index: 1,
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "problem returned non-finite objective NaN at index 1");
    }
}
