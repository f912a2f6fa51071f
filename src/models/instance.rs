//! TSP problem instance.

use std::collections::HashMap;

use super::City;

/// An immutable TSP instance: the set of cities defining one problem.
///
/// Cities are kept in the order they were loaded. Construction
/// heuristics scan cities in that order and break distance ties in
/// favor of the earliest candidate, so the stored order is part of the
/// instance's observable behavior, not an implementation detail.
///
/// # Examples
///
/// ```
/// use tsp_construct::models::{City, TspInstance};
///
/// let instance = TspInstance::new(vec![
///     City::new(1, 0, 0),
///     City::new(2, 0, 3),
///     City::new(3, 4, 0),
/// ]).unwrap();
/// assert_eq!(instance.len(), 3);
/// assert_eq!(instance.city(2).unwrap().coord(), (0, 3));
/// ```
#[derive(Debug, Clone)]
pub struct TspInstance {
    cities: Vec<City>,
    index: HashMap<usize, usize>,
}

impl TspInstance {
    /// Creates an instance from a list of cities.
    ///
    /// Returns `None` if two cities share an identifier.
    pub fn new(cities: Vec<City>) -> Option<Self> {
        let mut index = HashMap::with_capacity(cities.len());
        for (pos, city) in cities.iter().enumerate() {
            if index.insert(city.id(), pos).is_some() {
                return None;
            }
        }
        Some(Self { cities, index })
    }

    /// Cities in load order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Looks up a city by identifier.
    pub fn city(&self, id: usize) -> Option<&City> {
        self.index.get(&id).map(|&pos| &self.cities[pos])
    }

    /// Returns `true` if the given identifier belongs to this instance.
    pub fn contains(&self, id: usize) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the instance has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City identifiers in load order.
    pub fn ids(&self) -> Vec<usize> {
        self.cities.iter().map(|c| c.id()).collect()
    }
}
