//! Hill climbing configuration.

use crate::error::{Error, Result};

/// Configuration for hill climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_max_iterations(5000)
///     .with_step_size(0.25)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Maximum number of neighbor evaluations.
    pub max_iterations: usize,

    /// Stop once the current value changes by less than this in one iteration.
    ///
    /// The check also fires on an iteration without improvement, where the
    /// change is zero. Use `0.0` to run the full iteration budget.
    pub epsilon: f64,

    /// Half-width of the uniform perturbation applied to each coordinate.
    pub step_size: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            epsilon: 1e-6,
            step_size: 0.1,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `epsilon` or `step_size` is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidConfig {
                reason: "epsilon must be finite and non-negative",
            });
        }
        if !self.step_size.is_finite() || self.step_size < 0.0 {
            return Err(Error::InvalidConfig {
                reason: "step_size must be finite and non-negative",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HillClimbConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert!((config.epsilon - 1e-6).abs() < 1e-15);
        assert!((config.step_size - 0.1).abs() < 1e-15);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(HillClimbConfig::default().validate().is_ok());
        assert!(HillClimbConfig::default()
            .with_epsilon(0.0)
            .with_step_size(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_epsilon() {
        let config = HillClimbConfig::default().with_epsilon(-1.0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(HillClimbConfig::default()
            .with_epsilon(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_step_size() {
        let config = HillClimbConfig::default().with_step_size(f64::INFINITY);
        assert!(config.validate().is_err());
    }
}
