//! Metropolis acceptance criterion.

use rand::Rng;

/// Boltzmann-like probability of moving to a worsening candidate.
///
/// Computes `exp((e_cur - e_next) / t)` for temperature `t > 0`. For
/// `e_next > e_cur` the exponent is negative, so the result lies in
/// `(0, 1)`; at very small temperatures the exponential underflows to
/// `0.0`, which is the intended "reject everything worse" limit, not
/// an error.
pub fn acceptance_probability(e_cur: f64, e_next: f64, t: f64) -> f64 {
    ((e_cur - e_next) / t).exp()
}

/// Decides whether to move from the current solution to a candidate.
///
/// A candidate that is as good or better is accepted unconditionally,
/// without consulting the random stream. A worse candidate is accepted
/// iff one fresh uniform draw in `[0, 1)` falls below
/// [`acceptance_probability`].
pub fn accepts<R: Rng>(e_cur: f64, e_next: f64, t: f64, rng: &mut R) -> bool {
    if e_next <= e_cur {
        return true;
    }
    rng.random_range(0.0..1.0) < acceptance_probability(e_cur, e_next, t)
}
