//! Constructive heuristics for building TSP tours.
//!
//! - [`nearest_next`] — Append the nearest unrouted city to the tour's tail, O(n²)
//! - [`random_insertion`] — Insert a randomly drawn city after its nearest routed city, O(n²)
//! - [`random_tour`] — Uniformly random permutation, used as a cost baseline, O(n)
//!
//! All three take an explicit random source, so a seeded
//! [`rand::rngs::StdRng`] makes the output fully deterministic while
//! [`rand::rng()`] gives the default nondeterministic behavior.

mod nearest_next;
mod random_insertion;
mod random_tour;

pub use nearest_next::nearest_next;
pub use random_insertion::random_insertion;
pub use random_tour::random_tour;
