//! Domain model types for Euclidean TSP instances.
//!
//! Provides the core abstractions: cities with integer coordinates, an
//! immutable problem instance, and tours as closed cyclic orderings of
//! all cities.

mod city;
mod instance;
mod tour;

pub use city::City;
pub use instance::TspInstance;
pub use tour::Tour;
