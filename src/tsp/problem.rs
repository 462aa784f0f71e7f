//! Annealing problem glue for Euclidean TSP.

use super::cities::CitySet;
use super::tour::Tour;
use crate::anneal::AnnealProblem;
use rand::Rng;

/// Euclidean TSP instance: minimize closed-tour length over a fixed
/// [`CitySet`] with segment-reversal moves.
#[derive(Debug, Clone)]
pub struct EuclideanTsp {
    cities: CitySet,
}

impl EuclideanTsp {
    pub fn new(cities: CitySet) -> Self {
        Self { cities }
    }

    /// The underlying city set (read access for drivers).
    pub fn cities(&self) -> &CitySet {
        &self.cities
    }
}

impl AnnealProblem for EuclideanTsp {
    type Solution = Tour;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Tour {
        Tour::random(self.cities.len(), rng)
    }

    fn cost(&self, tour: &Tour) -> f64 {
        self.cities.tour_length(tour)
    }

    fn neighbor<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Tour {
        tour.reverse_random_segment(rng)
    }
}
