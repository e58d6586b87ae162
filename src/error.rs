//! Error taxonomy shared by all optimizers.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can abort an optimization call.
///
/// Bounds and configuration problems are reported at call entry, before
/// any point is sampled. Objective failures abort the search in progress;
/// there are no retries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bounds are empty: at least one dimension is required")]
    EmptyBounds,

    #[error("invalid bounds for dimension {dim}: lo = {lo}, hi = {hi}")]
    InvalidBounds { dim: usize, lo: f64, hi: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),

    #[error("objective returned NaN at {point:?}")]
    NanObjective { point: Vec<f64> },
}

impl Error {
    /// Returns `true` for either flavor of the invalid-bounds condition.
    pub fn is_invalid_bounds(&self) -> bool {
        matches!(self, Error::EmptyBounds | Error::InvalidBounds { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds_display() {
        let err = Error::InvalidBounds {
            dim: 1,
            lo: 3.0,
            hi: -3.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid bounds for dimension 1: lo = 3, hi = -3"
        );
        assert!(err.is_invalid_bounds());
        assert!(Error::EmptyBounds.is_invalid_bounds());
    }

    #[test]
    fn test_objective_error_keeps_source() {
        let inner = std::io::Error::other("solver diverged");
        let err = Error::Objective(Box::new(inner));
        let source = err.source().expect("source should be kept");
        assert_eq!(source.to_string(), "solver diverged");
        assert!(!err.is_invalid_bounds());
    }
}
