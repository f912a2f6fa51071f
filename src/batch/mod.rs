//! Repeated-run cost aggregation.
//!
//! Construction heuristics are stochastic, so their quality on an
//! instance is judged over many runs. This module repeats a
//! construction function and collects the minimum cost, the average
//! cost, and the wall-clock time spent. Directory traversal and
//! reporting stay with the caller.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;

use crate::models::{TspInstance, Tour};

/// Aggregated costs over repeated runs of one construction heuristic
/// on one instance.
///
/// The elapsed time covers all runs together and is observational
/// only; it carries no functional guarantee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Number of runs performed.
    pub runs: usize,
    /// Best (lowest) cost seen.
    pub min_cost: u64,
    /// Mean cost across all runs.
    pub avg_cost: f64,
    /// Wall-clock milliseconds for all runs together.
    pub elapsed_ms: u128,
}

/// Runs a construction function `runs` times over the instance and
/// aggregates the costs.
///
/// Returns `None` when `runs` is zero.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_construct::batch::repeat_construction;
/// use tsp_construct::constructive::nearest_next;
/// use tsp_construct::models::{City, TspInstance};
///
/// let instance = TspInstance::new(vec![
///     City::new(1, 0, 0),
///     City::new(2, 0, 3),
///     City::new(3, 4, 0),
/// ]).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let summary = repeat_construction(&instance, 10, &mut rng, nearest_next).unwrap();
/// assert_eq!(summary.runs, 10);
/// assert_eq!(summary.min_cost, 12);
/// assert_eq!(summary.avg_cost, 12.0);
/// ```
pub fn repeat_construction<R, F>(
    instance: &TspInstance,
    runs: usize,
    rng: &mut R,
    mut construct: F,
) -> Option<RunSummary>
where
    R: Rng,
    F: FnMut(&TspInstance, &mut R) -> Tour,
{
    if runs == 0 {
        return None;
    }

    let started = Instant::now();
    let mut min_cost = u64::MAX;
    let mut total_cost: u64 = 0;
    for _ in 0..runs {
        let tour = construct(instance, rng);
        min_cost = min_cost.min(tour.cost());
        total_cost += tour.cost();
    }
    let elapsed_ms = started.elapsed().as_millis();

    Some(RunSummary {
        runs,
        min_cost,
        avg_cost: total_cost as f64 / runs as f64,
        elapsed_ms,
    })
}
