//! From-scratch cyclic cost evaluation.

use crate::distance::euclidean;
use crate::models::{TspInstance, Tour};

/// Computes the total cost of the closed cycle visiting the given
/// cities in order, including the leg from the last city back to the
/// first.
///
/// Each leg is rounded to the nearest integer before summation. Empty
/// and single-city sequences cost 0.
///
/// # Panics
///
/// Panics if any identifier is not present in the instance.
///
/// # Examples
///
/// ```
/// use tsp_construct::evaluation::cycle_cost;
/// use tsp_construct::models::{City, TspInstance};
///
/// let instance = TspInstance::new(vec![
///     City::new(1, 0, 0),
///     City::new(2, 0, 3),
///     City::new(3, 4, 0),
/// ]).unwrap();
/// // A 3-4-5 right triangle: every tour order costs 3 + 4 + 5.
/// assert_eq!(cycle_cost(&instance, &[1, 2, 3]), 12);
/// assert_eq!(cycle_cost(&instance, &[3, 1, 2]), 12);
/// ```
pub fn cycle_cost(instance: &TspInstance, cities: &[usize]) -> u64 {
    if cities.len() < 2 {
        return 0;
    }
    let coord = |id: usize| {
        instance
            .city(id)
            .unwrap_or_else(|| panic!("city id {id} not in instance"))
            .coord()
    };
    let mut cost = 0;
    for i in 0..cities.len() {
        let next = cities[(i + 1) % cities.len()];
        cost += euclidean(coord(cities[i]), coord(next));
    }
    cost
}

/// Recomputes a tour's cost from scratch and checks it against the
/// cost the tour carries.
///
/// Useful for validating heuristic output, whose running cost must
/// agree with an independent recomputation.
pub fn cost_matches(instance: &TspInstance, tour: &Tour) -> bool {
    tour.cost() == cycle_cost(instance, tour.cities())
}
