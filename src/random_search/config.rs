//! Random local search configuration.

use crate::error::{Error, Result};

/// Configuration for random local search.
///
/// # Examples
///
/// ```
/// use u_localsearch::RandomSearchConfig;
///
/// let config = RandomSearchConfig::default()
///     .with_max_iterations(10_000)
///     .with_epsilon(0.0);
/// assert_eq!(config.max_iterations, 10_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSearchConfig {
    /// Maximum number of candidate draws.
    pub max_iterations: usize,

    /// Stop once the best value changes by less than this in one iteration.
    ///
    /// A candidate that does not improve leaves the change at zero, so any
    /// positive epsilon stops at the first non-improving draw.
    pub epsilon: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for RandomSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            epsilon: 1e-6,
            seed: None,
        }
    }
}

impl RandomSearchConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidConfig {
                reason: "epsilon must be finite and non-negative",
            });
        }
        Ok(())
    }
}
