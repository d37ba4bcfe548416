//! A generation's worth of candidate tours.
//!
//! [`Population`] is a plain ordered collection — the order carries no
//! meaning beyond iteration. Each generation the engine builds an entirely
//! new `Population` and swaps it in whole, so no caller ever observes a
//! half-built one.

use std::ops::Index;
use std::sync::Arc;

use rand::Rng;

use crate::graph::{NoEdgeError, WeightedGraph};
use crate::tour::Tour;

/// A fixed-capacity collection of [`Tour`]s.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Tour>,
}

impl Population {
    /// An empty population ready to receive `capacity` individuals.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Generates `size` random individuals over `graph`.
    ///
    /// Each individual starts as the natural-order circuit and is shuffled
    /// with its own draws from `rng`, so no two individuals are correlated.
    pub fn generate<R: Rng>(graph: &Arc<WeightedGraph>, size: usize, rng: &mut R) -> Self {
        let mut population = Self::with_capacity(size);
        for _ in 0..size {
            let mut tour = Tour::natural(graph.clone());
            tour.shuffle(rng);
            population.push(tour);
        }
        population
    }

    /// Appends an individual.
    pub fn push(&mut self, tour: Tour) {
        self.individuals.push(tour);
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// `true` if there are no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individual at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Tour> {
        self.individuals.get(index)
    }

    /// Iterates over the individuals in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tour> {
        self.individuals.iter()
    }

    /// All individuals as a slice.
    pub fn individuals(&self) -> &[Tour] {
        &self.individuals
    }

    /// The individual with the minimum distance.
    ///
    /// Ties break to the first occurrence in iteration order. Linear scan
    /// recomputing each tour's distance, O(len × tour length).
    ///
    /// # Errors
    /// Returns [`NoEdgeError`] if any tour crosses a missing edge.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn fittest(&self) -> Result<&Tour, NoEdgeError> {
        assert!(
            !self.individuals.is_empty(),
            "population must not be empty"
        );
        let mut best = &self.individuals[0];
        let mut best_distance = best.distance()?;
        for tour in &self.individuals[1..] {
            let distance = tour.distance()?;
            if distance < best_distance {
                best = tour;
                best_distance = distance;
            }
        }
        Ok(best)
    }
}

impl Index<usize> for Population {
    type Output = Tour;

    fn index(&self, index: usize) -> &Tour {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Tour;
    type IntoIter = std::slice::Iter<'a, Tour>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
