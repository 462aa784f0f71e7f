//! Euclidean TSP domain types.
//!
//! An immutable [`CitySet`] holds the coordinates and scores tours; a
//! [`Tour`] is a permutation of city indices read as a closed cycle;
//! [`EuclideanTsp`] wires both into the annealing problem trait.

mod cities;
mod problem;
mod tour;

pub use cities::CitySet;
pub use problem::EuclideanTsp;
pub use tour::Tour;
