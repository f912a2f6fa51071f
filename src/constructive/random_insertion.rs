//! Random nearest-insertion constructive heuristic.
//!
//! Builds a tour by drawing unrouted cities in random order and
//! splicing each one in directly after its nearest city already on the
//! route.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.

use rand::Rng;

use crate::evaluation::cycle_cost;
use crate::models::{TspInstance, Tour};

/// Constructs a tour by random-order nearest insertion.
///
/// Picks a uniformly random starting city, then repeatedly draws a
/// uniformly random unrouted city and inserts it immediately after the
/// nearest city currently on the partial tour. The scan starts with
/// the tour's first city as the baseline and walks the rest of the
/// partial tour in order; the first city achieving the minimum wins
/// ties. The total cost is recomputed from scratch over the final
/// cycle rather than accumulated during construction, since insertions
/// in the middle of the route change legs already counted.
///
/// An empty instance yields an empty tour with cost 0.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_construct::constructive::random_insertion;
/// use tsp_construct::models::{City, TspInstance};
///
/// let instance = TspInstance::new(vec![
///     City::new(1, 0, 0),
///     City::new(2, 0, 3),
///     City::new(3, 4, 0),
/// ]).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = random_insertion(&instance, &mut rng);
/// assert!(tour.is_permutation_of(&instance));
/// assert_eq!(tour.cost(), 12);
/// ```
pub fn random_insertion<R: Rng>(instance: &TspInstance, rng: &mut R) -> Tour {
    let cities = instance.cities();
    if cities.is_empty() {
        return Tour::new(Vec::new(), 0);
    }

    let mut unrouted: Vec<usize> = (0..cities.len()).collect();
    let start = unrouted.remove(rng.random_range(0..unrouted.len()));

    let mut route = Vec::with_capacity(cities.len());
    route.push(start);

    while !unrouted.is_empty() {
        let picked = unrouted.remove(rng.random_range(0..unrouted.len()));

        let mut best_pos = 0;
        let mut best_cost = cities[route[0]].distance_to(&cities[picked]);
        for (pos, &routed) in route.iter().enumerate().skip(1) {
            let d = cities[picked].distance_to(&cities[routed]);
            if d < best_cost {
                best_cost = d;
                best_pos = pos;
            }
        }
        route.insert(best_pos + 1, picked);
    }

    let order: Vec<usize> = route.into_iter().map(|p| cities[p].id()).collect();
    let cost = cycle_cost(instance, &order);
    Tour::new(order, cost)
}
