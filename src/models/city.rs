//! City type.

use serde::{Deserialize, Serialize};

use crate::distance::euclidean;

/// A city in a TSP instance: a unique identifier with a fixed 2D
/// integer coordinate. Immutable once loaded.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::City;
///
/// let a = City::new(1, 0, 0);
/// let b = City::new(2, 3, 4);
/// assert_eq!(a.id(), 1);
/// assert_eq!(a.distance_to(&b), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: i64,
    y: i64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: i64, y: i64) -> Self {
        Self { id, x, y }
    }

    /// City identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Coordinate pair.
    pub fn coord(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Rounded Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> u64 {
        euclidean(self.coord(), other.coord())
    }
}
