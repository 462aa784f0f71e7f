//! Simulated annealing core.
//!
//! A single-solution trajectory metaheuristic: each iteration perturbs
//! the current solution, and worsening candidates are accepted with a
//! probability that shrinks as the temperature drops, letting the
//! search escape local optima early on and settle later.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

pub mod acceptance;
pub mod schedule;

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use types::AnnealProblem;
