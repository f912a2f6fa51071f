//! Random-tour baseline.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::evaluation::cycle_cost;
use crate::models::{TspInstance, Tour};

/// Produces a uniformly random tour over all cities.
///
/// Not a construction heuristic in any meaningful sense; it serves as
/// an upper-bound reference when judging the greedy constructions.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_construct::constructive::random_tour;
/// use tsp_construct::models::{City, TspInstance};
///
/// let instance = TspInstance::new(vec![
///     City::new(1, 0, 0),
///     City::new(2, 0, 3),
///     City::new(3, 4, 0),
/// ]).unwrap();
///
/// let tour = random_tour(&instance, &mut StdRng::seed_from_u64(42));
/// assert!(tour.is_permutation_of(&instance));
/// assert_eq!(tour.cost(), 12);
/// ```
pub fn random_tour<R: Rng>(instance: &TspInstance, rng: &mut R) -> Tour {
    let mut order = instance.ids();
    order.shuffle(rng);
    let cost = cycle_cost(instance, &order);
    Tour::new(order, cost)
}
