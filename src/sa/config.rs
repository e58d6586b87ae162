//! SA configuration and cooling schedules.

use crate::error::{Error, Result};

/// Cooling schedule for temperature reduction, applied once per iteration.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Most widely used. Typical `alpha`: 0.95–0.99.
    Geometric {
        /// Cooling factor, normally in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_iter * T_0 * T_min)`.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.99 }
    }
}

impl CoolingSchedule {
    /// Computes the temperature after one cooling step.
    pub fn cool(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.001)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_max_iterations(20_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Maximum number of neighbor evaluations.
    pub max_iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The algorithm stops when T drops below this.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Half-width of the uniform move applied to the single perturbed
    /// coordinate. Independent of the box size.
    pub perturbation: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 1000.0,
            min_temperature: 1e-6,
            cooling: CoolingSchedule::default(),
            perturbation: 1.0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Shorthand for geometric cooling with factor `alpha`.
    pub fn with_cooling_rate(self, alpha: f64) -> Self {
        self.with_cooling(CoolingSchedule::Geometric { alpha })
    }

    pub fn with_perturbation(mut self, half_width: f64) -> Self {
        self.perturbation = half_width;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Only non-finite parameters are rejected. A temperature that starts at
    /// or below zero, or below `min_temperature`, is a stop condition for the
    /// runner rather than an error, and a cooling factor of 1 or more leaves
    /// the iteration budget as the only bound.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() {
            return Err(Error::InvalidConfig {
                reason: "initial_temperature must be finite",
            });
        }
        if !self.min_temperature.is_finite() {
            return Err(Error::InvalidConfig {
                reason: "min_temperature must be finite",
            });
        }
        if !self.perturbation.is_finite() || self.perturbation < 0.0 {
            return Err(Error::InvalidConfig {
                reason: "perturbation must be finite and non-negative",
            });
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !alpha.is_finite() {
                    return Err(Error::InvalidConfig {
                        reason: "geometric alpha must be finite",
                    });
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !beta.is_finite() {
                    return Err(Error::InvalidConfig {
                        reason: "lundy-mees beta must be finite",
                    });
                }
            }
        }
        Ok(())
    }
}
