//! Core trait for the annealing loop.

use rand::Rng;

/// Defines a problem solvable by the annealing runner.
///
/// The implementor supplies solution construction, cost evaluation and
/// neighbor generation; the runner handles temperature management, the
/// acceptance criterion and cooling.
///
/// # Minimization
///
/// The runner minimizes the cost function. For maximization, negate
/// the cost.
///
/// All randomness flows through the `R: Rng` parameters, so a seeded
/// generator makes a whole run reproducible and independent runs can
/// carry independent streams.
pub trait AnnealProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    ///
    /// Must return a new solution and leave the input untouched. The
    /// neighborhood must be connected (any solution reachable from any
    /// other via a sequence of moves).
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
