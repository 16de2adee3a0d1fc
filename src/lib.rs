//! NSGA-II multi-objective evolutionary optimization over bit-string genomes.
//!
//! Provides a complete implementation of the Non-dominated Sorting Genetic
//! Algorithm II (Deb et al., 2002) for problems whose decision variables are
//! encoded as fixed-length binary strings:
//!
//! - **Variation**: uniform crossover followed by per-bit mutation
//! - **Pareto ranking**: non-dominated sorting into successive fronts
//! - **Crowding distance**: per-front diversity scoring
//! - **Environmental selection**: whole fronts first, the boundary front
//!   truncated by crowding distance
//!
//! # Architecture
//!
//! The crate is domain-agnostic. How a genome decodes into decision
//! variables, how objectives are computed, and which dominance relation
//! applies are supplied by the consumer through
//! [`nsga2::BinaryProblem`].

pub mod nsga2;
