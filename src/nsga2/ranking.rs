//! Non-dominated sorting.
//!
//! Partitions a set of candidates into successive Pareto fronts. Front 1
//! holds every candidate no other candidate dominates; front `r + 1` holds
//! every candidate dominated only by members of fronts `1..=r`.
//!
//! Fronts are built with domination counts (Deb et al., 2002) in
//! O(m · n²) instead of repeatedly rescanning the remaining set. The
//! resulting partition and ordering are the same as the rescanning
//! formulation: better fronts first, members of a front in input order.
//!
//! With the `parallel` feature the pairwise dominance table is filled with
//! rayon. Front construction stays sequential so the output is unchanged.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use super::types::{Candidate, Dominance};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Groups objective vectors into Pareto fronts.
///
/// Returns indices into `objectives`, `fronts[0]` being the non-dominated
/// set. Indices within a front are ascending.
///
/// # Panics
///
/// Panics if `dominance` is not a strict partial order (a dominance cycle
/// leaves members that can never be ranked).
///
/// # Example
///
/// ```
/// use u_nsga2::nsga2::Minimize;
/// use u_nsga2::nsga2::ranking::pareto_fronts;
///
/// let objectives: Vec<&[f64]> = vec![
///     &[1.0, 5.0], // A
///     &[3.0, 3.0], // B
///     &[5.0, 1.0], // C
///     &[4.0, 4.0], // D — dominated by B
/// ];
///
/// let fronts = pareto_fronts(&objectives, &Minimize);
/// assert_eq!(fronts, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn pareto_fronts<D: Dominance + ?Sized>(
    objectives: &[&[f64]],
    dominance: &D,
) -> Vec<Vec<usize>> {
    let n = objectives.len();
    if n == 0 {
        return Vec::new();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];

    for (i, row) in dominance_rows(objectives, dominance).into_iter().enumerate() {
        for (j, i_dominates) in row {
            if i_dominates {
                dominated[i].push(j);
                domination_count[j] += 1;
            } else {
                dominated[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    let mut fronts = Vec::new();
    let mut ranked = 0usize;

    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominated[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        next.sort_unstable();
        ranked += current.len();
        fronts.push(std::mem::replace(&mut current, next));
    }

    assert_eq!(
        ranked, n,
        "dominance relation is not a strict partial order: {} members left unranked",
        n - ranked
    );

    fronts
}

/// Ranks a family and returns it grouped by front.
///
/// Every candidate gets `rank` 1 (best) to `k` and its crowding distance
/// reset to `0.0`. The returned vector holds front 1 first, then front 2,
/// and so on; within a front candidates keep their input order.
pub fn non_dominated_sort<D: Dominance + ?Sized>(
    family: Vec<Candidate>,
    dominance: &D,
) -> Vec<Candidate> {
    let fronts = {
        let objectives: Vec<&[f64]> = family.iter().map(|c| c.objectives()).collect();
        pareto_fronts(&objectives, dominance)
    };

    let mut slots: Vec<Option<Candidate>> = family.into_iter().map(Some).collect();
    let mut sorted = Vec::with_capacity(slots.len());

    for (r, front) in fronts.iter().enumerate() {
        for &i in front {
            if let Some(mut candidate) = slots[i].take() {
                candidate.set_rank(r + 1);
                candidate.set_crowding_distance(0.0);
                sorted.push(candidate);
            }
        }
    }

    sorted
}

/// For each `i`, the later indices `j > i` comparable with `i`, tagged with
/// whether `i` is the dominating side.
fn dominance_rows<D: Dominance + ?Sized>(
    objectives: &[&[f64]],
    dominance: &D,
) -> Vec<Vec<(usize, bool)>> {
    #[cfg(feature = "parallel")]
    {
        (0..objectives.len())
            .into_par_iter()
            .map(|i| compare_row(objectives, i, dominance))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..objectives.len())
            .map(|i| compare_row(objectives, i, dominance))
            .collect()
    }
}

fn compare_row<D: Dominance + ?Sized>(
    objectives: &[&[f64]],
    i: usize,
    dominance: &D,
) -> Vec<(usize, bool)> {
    let p = objectives[i];
    ((i + 1)..objectives.len())
        .filter_map(|j| {
            let q = objectives[j];
            if dominance.dominates(p, q) {
                Some((j, true))
            } else if dominance.dominates(q, p) {
                Some((j, false))
            } else {
                None
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
