//! NSGA-II framework.
//!
//! Users define their problem by implementing [`BinaryProblem`], which
//! specifies how to evaluate a [`BitGenome`] and, optionally, how to
//! initialize and mutate it and which dominance relation to use.
//!
//! # Core Traits
//!
//! - [`BinaryProblem`]: Problem definition — evaluation, initialization, mutation
//! - [`Dominance`]: Strict Pareto dominance between two objective vectors
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: Algorithm parameters (sizes, genome shape, generations)
//! - [`Nsga2Runner`]: Executes the evolutionary loop
//! - [`Nsga2Result`]: Final population with per-generation statistics
//!
//! # Submodules
//!
//! - [`variation`]: Uniform crossover and bit-flip mutation
//! - [`ranking`]: Non-dominated sorting
//! - [`crowding`]: Crowding distance assignment
//! - [`selection`]: Crowded environmental selection
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Syswerda (1989), *Uniform Crossover in Genetic Algorithms*

mod config;
pub mod crowding;
mod error;
mod genome;
pub mod ranking;
mod runner;
pub mod selection;
mod types;
pub mod variation;

pub use config::Nsga2Config;
pub use error::{ConfigError, Nsga2Error};
pub use genome::BitGenome;
pub use runner::{GenerationStats, Nsga2Result, Nsga2Runner};
pub use types::{BinaryProblem, Candidate, Dominance, Maximize, Minimize};
