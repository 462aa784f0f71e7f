//! Hyperbolic cooling schedule.
//!
//! The temperature at iteration `k` is recomputed from scratch as
//! `0.1 * t_max / k` rather than decayed from the previous value.
//! This is unusual (most schedules decay a running temperature
//! multiplicatively) but it is deliberate: the schedule is a pure
//! function of `(t_max, k)`, which also makes it trivially
//! restartable at any `k`.

/// Temperature for iteration `k` (`k >= 1`).
pub fn temperature(t_max: f64, k: usize) -> f64 {
    debug_assert!(k >= 1, "schedule evaluated before the first iteration");
    0.1 * t_max / k as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_iteration_value() {
        assert!((temperature(1000.0, 1) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_strictly_decreasing_in_k() {
        let t_max = 1000.0;
        let mut prev = f64::INFINITY;
        for k in 1..=10_000 {
            let t = temperature(t_max, k);
            assert!(t < prev, "temperature must strictly decrease: k={k}");
            assert!(t > 0.0);
            prev = t;
        }
    }

    #[test]
    fn test_pure_in_inputs() {
        // Same (t_max, k) always yields the same temperature.
        assert_eq!(temperature(500.0, 37), temperature(500.0, 37));
    }

    #[test]
    fn test_scales_linearly_with_t_max() {
        let ratio = temperature(2000.0, 5) / temperature(1000.0, 5);
        assert!((ratio - 2.0).abs() < 1e-12);
    }
}
