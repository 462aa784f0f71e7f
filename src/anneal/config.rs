//! Annealing configuration.

/// Configuration parameters for an annealing run.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_t_max(1000.0)
///     .with_t_min(0.001)
///     .with_k_max(100_000)
///     .with_seed(42);
/// assert_eq!(config.k_max, 100_000);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub t_max: f64,

    /// Temperature floor. The loop stops once the temperature drops
    /// to this value or below.
    pub t_min: f64,

    /// Hard cap on the iteration counter `k`.
    pub k_max: usize,

    /// Random seed (None for a fresh random stream per run).
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            t_max: 1000.0,
            t_min: 1e-3,
            k_max: 1_000_000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    /// Sets the initial temperature.
    pub fn with_t_max(mut self, t: f64) -> Self {
        self.t_max = t;
        self
    }

    /// Sets the temperature floor.
    pub fn with_t_min(mut self, t: f64) -> Self {
        self.t_min = t;
        self
    }

    /// Sets the iteration cap.
    pub fn with_k_max(mut self, k: usize) -> Self {
        self.k_max = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Rejecting these up front keeps the runner free of divide-by-zero
    /// and never-terminating corner cases.
    pub fn validate(&self) -> Result<(), String> {
        if self.t_max <= 0.0 {
            return Err(format!("t_max must be positive, got {}", self.t_max));
        }
        if self.t_min <= 0.0 {
            return Err(format!("t_min must be positive, got {}", self.t_min));
        }
        if self.k_max == 0 {
            return Err("k_max must be at least 1".into());
        }
        Ok(())
    }
}
