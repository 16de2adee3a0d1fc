//! Crowded environmental selection.
//!
//! Builds the next population from a ranked family: whole fronts are
//! admitted best-first while they fit, and the first front that would
//! overflow the capacity is truncated to its most isolated members by
//! crowding distance.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective GA: NSGA-II", §III-C

use super::crowding::assign_crowding_distance;
use super::types::Candidate;
use log::trace;
use std::cmp::Ordering;

/// Selects `population_size` candidates from a ranked family.
///
/// `ranked_family` must be the output of
/// [`non_dominated_sort`](super::ranking::non_dominated_sort): contiguous
/// runs of equal rank in ascending rank order.
///
/// - A run that fits in the remaining capacity is admitted whole, with no
///   crowding distance computed.
/// - The first run that does not fit gets fresh crowding distances, is
///   sorted by distance (descending, stable) and admitted until the
///   population is full. Worse runs are discarded. Equal distances keep
///   the order [`assign_crowding_distance`] leaves: ascending by the last
///   objective.
///
/// Returns `min(population_size, ranked_family.len())` candidates.
///
/// # Example
///
/// ```
/// use u_nsga2::nsga2::{BitGenome, Candidate, Minimize};
/// use u_nsga2::nsga2::ranking::non_dominated_sort;
/// use u_nsga2::nsga2::selection::crowded_selection;
///
/// let family: Vec<Candidate> = [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0], [4.0, 4.0]]
///     .iter()
///     .map(|o| Candidate::new(BitGenome::new(1, 1), o.to_vec()))
///     .collect();
///
/// let next = crowded_selection(non_dominated_sort(family, &Minimize), 2);
/// assert_eq!(next.len(), 2);
/// assert!(next.iter().all(|c| c.rank() == 1));
/// ```
pub fn crowded_selection(ranked_family: Vec<Candidate>, population_size: usize) -> Vec<Candidate> {
    debug_assert!(
        ranked_family.windows(2).all(|w| w[0].rank() <= w[1].rank()),
        "family must be grouped by ascending rank"
    );

    let mut next = Vec::with_capacity(population_size.min(ranked_family.len()));
    let mut remaining = ranked_family.into_iter().peekable();

    while next.len() < population_size {
        let Some(first) = remaining.next() else {
            break;
        };
        let rank = first.rank();
        let mut run = vec![first];
        while let Some(c) = remaining.next_if(|c| c.rank() == rank) {
            run.push(c);
        }

        let missing = population_size - next.len();
        if run.len() <= missing {
            next.extend(run);
            continue;
        }

        let mut run = assign_crowding_distance(run);
        run.sort_by(|a, b| {
            b.crowding_distance()
                .partial_cmp(&a.crowding_distance())
                .unwrap_or(Ordering::Equal)
        });
        trace!(
            "front {} truncated from {} to {} by crowding distance",
            rank,
            run.len(),
            missing
        );
        next.extend(run.into_iter().take(missing));
        break;
    }

    next
}

// ============================================================================
// Tests
// ============================================================================
