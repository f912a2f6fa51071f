//! Tour type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::TspInstance;

/// An ordered sequence of city identifiers representing a closed route
/// (the last city connects back to the first), together with its total
/// cost.
///
/// A valid tour over an instance visits every city exactly once. The
/// cost is the sum of the rounded leg distances around the cycle.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::Tour;
///
/// let tour = Tour::new(vec![1, 3, 2], 12);
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.cost(), 12);
/// assert_eq!(tour.cities(), &[1, 3, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
    cost: u64,
}

impl Tour {
    /// Creates a tour from a city ordering and its total cost.
    pub fn new(cities: Vec<usize>, cost: u64) -> Self {
        Self { cities, cost }
    }

    /// City identifiers in visit order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Total cost of the closed cycle.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns `true` if this tour visits every city of the instance
    /// exactly once.
    pub fn is_permutation_of(&self, instance: &TspInstance) -> bool {
        if self.cities.len() != instance.len() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.cities.len());
        self.cities
            .iter()
            .all(|&id| instance.contains(id) && seen.insert(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn triangle() -> TspInstance {
        TspInstance::new(vec![
            City::new(1, 0, 0),
            City::new(2, 0, 3),
            City::new(3, 4, 0),
        ])
        .expect("unique ids")
    }

    #[test]
    fn test_tour_accessors() {
        let tour = Tour::new(vec![2, 1, 3], 12);
        assert_eq!(tour.cities(), &[2, 1, 3]);
        assert_eq!(tour.cost(), 12);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
    }

    #[test]
    fn test_tour_empty() {
        let tour = Tour::new(Vec::new(), 0);
        assert!(tour.is_empty());
        assert_eq!(tour.cost(), 0);
    }

    #[test]
    fn test_permutation_valid() {
        let inst = triangle();
        assert!(Tour::new(vec![3, 1, 2], 0).is_permutation_of(&inst));
    }

    #[test]
    fn test_permutation_wrong_length() {
        let inst = triangle();
        assert!(!Tour::new(vec![1, 2], 0).is_permutation_of(&inst));
    }

    #[test]
    fn test_permutation_duplicate() {
        let inst = triangle();
        assert!(!Tour::new(vec![1, 2, 2], 0).is_permutation_of(&inst));
    }

    #[test]
    fn test_permutation_unknown_id() {
        let inst = triangle();
        assert!(!Tour::new(vec![1, 2, 9], 0).is_permutation_of(&inst));
    }
}
