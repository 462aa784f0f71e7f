//! Approximate Euclidean TSP solving via simulated annealing.
//!
//! Given a set of 2D city coordinates, the crate searches for a short
//! closed visiting order (a cyclic tour) using a single-solution
//! trajectory metaheuristic: random segment-reversal moves, a
//! Metropolis acceptance criterion, and a hyperbolic cooling schedule.
//!
//! The annealing loop itself is domain-agnostic: [`anneal`] exposes an
//! [`AnnealProblem`](anneal::AnnealProblem) trait plus a runner, and
//! [`tsp`] supplies the Euclidean TSP implementation of that trait
//! ([`CitySet`](tsp::CitySet), [`Tour`](tsp::Tour),
//! [`EuclideanTsp`](tsp::EuclideanTsp)).
//!
//! # Example
//!
//! ```
//! use tsp_anneal::anneal::{AnnealConfig, AnnealRunner};
//! use tsp_anneal::tsp::{CitySet, EuclideanTsp};
//!
//! let cities = CitySet::new(vec![
//!     (0.0, 0.0),
//!     (10.0, 0.0),
//!     (10.0, 10.0),
//!     (0.0, 10.0),
//! ])
//! .unwrap();
//!
//! let problem = EuclideanTsp::new(cities);
//! let config = AnnealConfig::default()
//!     .with_t_max(1000.0)
//!     .with_t_min(0.001)
//!     .with_k_max(100_000)
//!     .with_seed(42);
//!
//! let result = AnnealRunner::run(&problem, &config).unwrap();
//! assert!(result.cost <= 42.0); // square perimeter is 40
//! ```
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

pub mod anneal;
pub mod tsp;
