//! Crowding distance assignment for diversity preservation.
//!
//! Measures how isolated each member of a single Pareto front is in
//! objective space. Higher distance means a sparser neighbourhood, so the
//! candidate is preferred when a front has to be truncated.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II", §III-B

use super::types::Candidate;
use std::cmp::Ordering;

/// Crowding distance of each objective vector in one front.
///
/// For each objective:
/// 1. Sort the front ascending by that objective (stable, starting from
///    the order left by the previous objective)
/// 2. Assign infinity to the two boundary members
/// 3. Add `(next - prev) / (max - min)` to every interior member
///
/// An objective whose range is zero contributes nothing. Boundary members
/// stay infinite through summation.
///
/// # Complexity
///
/// O(m · n log n) where m = number of objectives, n = front size
///
/// # Example
///
/// ```
/// use u_nsga2::nsga2::crowding::crowding_distance;
///
/// let objectives: Vec<&[f64]> = vec![&[1.0, 5.0], &[3.0, 3.0], &[5.0, 1.0]];
/// let distances = crowding_distance(&objectives);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-12);
/// ```
pub fn crowding_distance(objectives: &[&[f64]]) -> Vec<f64> {
    crowding_with_order(objectives).0
}

/// Distances indexed like `objectives`, plus the ascending order of the
/// front by its last objective.
fn crowding_with_order(objectives: &[&[f64]]) -> (Vec<f64>, Vec<usize>) {
    let n = objectives.len();
    let mut order: Vec<usize> = (0..n).collect();
    if n == 0 {
        return (Vec::new(), order);
    }

    let m = objectives[0].len();
    let mut distances = vec![0.0f64; n];
    if n <= 2 {
        distances.fill(f64::INFINITY);
    }

    for obj in 0..m {
        order.sort_by(|&a, &b| {
            objectives[a][obj]
                .partial_cmp(&objectives[b][obj])
                .unwrap_or(Ordering::Equal)
        });

        let first = order[0];
        let last = order[n - 1];
        distances[first] = f64::INFINITY;
        distances[last] = f64::INFINITY;

        let range = objectives[last][obj] - objectives[first][obj];
        if range > 0.0 {
            for k in 1..(n - 1) {
                let prev = objectives[order[k - 1]][obj];
                let next = objectives[order[k + 1]][obj];
                distances[order[k]] += (next - prev) / range;
            }
        }
    }

    (distances, order)
}

/// Recomputes the crowding distance of every member of `front`.
///
/// `front` must hold candidates of a single rank. Any distance left from
/// an earlier evaluation is discarded. The front comes back in the order of
/// the final per-objective sort, ascending by the last objective, so a
/// later stable sort by distance breaks ties from that order.
pub fn assign_crowding_distance(front: Vec<Candidate>) -> Vec<Candidate> {
    let (distances, order) = {
        let objectives: Vec<&[f64]> = front.iter().map(|c| c.objectives()).collect();
        crowding_with_order(&objectives)
    };

    let mut slots: Vec<Option<Candidate>> = front.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|i| {
            let mut candidate = slots[i].take()?;
            candidate.set_crowding_distance(distances[i]);
            Some(candidate)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
