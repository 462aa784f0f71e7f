//! Annealing execution loop.

use super::acceptance;
use super::config::AnnealConfig;
use super::schedule;
use super::types::AnnealProblem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The current solution at termination.
    pub solution: S,

    /// Cost of the final solution.
    pub cost: f64,

    /// Final value of the iteration counter `k`.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,
}

/// Executes the annealing loop.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs annealing from a random initial solution.
    ///
    /// Fails fast on an invalid configuration; no loop work happens
    /// before validation.
    pub fn run<P: AnnealProblem>(
        problem: &P,
        config: &AnnealConfig,
    ) -> Result<AnnealResult<P::Solution>, String> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let initial = problem.initial_solution(&mut rng);
        Ok(Self::anneal(problem, config, initial, &mut rng))
    }

    /// Runs annealing from a caller-supplied initial solution.
    pub fn run_from<P: AnnealProblem, R: Rng>(
        problem: &P,
        config: &AnnealConfig,
        initial: P::Solution,
        rng: &mut R,
    ) -> Result<AnnealResult<P::Solution>, String> {
        config.validate()?;
        Ok(Self::anneal(problem, config, initial, rng))
    }

    /// Runs `runs` independent annealing runs, one per derived seed.
    ///
    /// Runs share no state, so with the `parallel` feature they execute
    /// across rayon worker threads; results arrive in seed order either
    /// way. Seeding the config makes the whole batch reproducible.
    #[cfg(feature = "parallel")]
    pub fn run_batch<P: AnnealProblem>(
        problem: &P,
        config: &AnnealConfig,
        runs: usize,
    ) -> Result<Vec<AnnealResult<P::Solution>>, String> {
        use rayon::prelude::*;

        config.validate()?;
        let base = config.seed.unwrap_or_else(rand::random);
        (0..runs as u64)
            .into_par_iter()
            .map(|i| Self::run(problem, &config.clone().with_seed(base.wrapping_add(i))))
            .collect()
    }

    /// Runs `runs` independent annealing runs, one per derived seed.
    ///
    /// Runs share no state, so with the `parallel` feature they execute
    /// across rayon worker threads; results arrive in seed order either
    /// way. Seeding the config makes the whole batch reproducible.
    #[cfg(not(feature = "parallel"))]
    pub fn run_batch<P: AnnealProblem>(
        problem: &P,
        config: &AnnealConfig,
        runs: usize,
    ) -> Result<Vec<AnnealResult<P::Solution>>, String> {
        config.validate()?;
        let base = config.seed.unwrap_or_else(rand::random);
        (0..runs as u64)
            .map(|i| Self::run(problem, &config.clone().with_seed(base.wrapping_add(i))))
            .collect()
    }

    /// The iteration loop. Search state (current solution, cost, `k`,
    /// temperature) lives entirely in this frame; it is self-consistent
    /// at every step boundary.
    fn anneal<P: AnnealProblem, R: Rng>(
        problem: &P,
        config: &AnnealConfig,
        initial: P::Solution,
        rng: &mut R,
    ) -> AnnealResult<P::Solution> {
        let mut current = initial;
        let mut current_cost = problem.cost(&current);
        let mut t = config.t_max;
        let mut k = 1usize;

        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        // Termination is checked before any step work, so a config
        // whose floor already covers t_max performs zero iterations.
        while t > config.t_min && k < config.k_max {
            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);

            if acceptance::accepts(current_cost, candidate_cost, t, rng) {
                if candidate_cost < current_cost {
                    improving_moves += 1;
                }
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;
            }

            // Stateless recompute from (t_max, k); k >= 1 throughout.
            t = schedule::temperature(config.t_max, k);
            k += 1;
        }

        AnnealResult {
            solution: current,
            cost: current_cost,
            iterations: k,
            final_temperature: t,
            accepted_moves,
            improving_moves,
        }
    }
}
