//! Objective functions.
//!
//! Any `Fn(&[f64]) -> f64` is an [`Objective`]. Objectives that can fail
//! are wrapped in [`Fallible`]; their first error aborts the search and is
//! returned as [`Error::Objective`].

use std::convert::Infallible;
use std::error::Error as StdError;

use crate::error::{Error, Result};

/// A function to minimize over a bounded box.
///
/// Implementations should be deterministic: the optimizers assume that
/// evaluating the same point twice yields the same value.
pub trait Objective {
    /// Failure type of a single evaluation.
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the objective at `point`. Lower is better.
    fn evaluate(&self, point: &[f64]) -> std::result::Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, point: &[f64]) -> std::result::Result<f64, Infallible> {
        Ok(self(point))
    }
}

/// Adapter for objectives returning `Result<f64, E>`.
///
/// # Examples
///
/// ```
/// use u_localsearch::{objective::Fallible, Bounds, HillClimbConfig, HillClimbRunner};
///
/// let objective = Fallible(|_x: &[f64]| -> Result<f64, std::io::Error> {
///     Err(std::io::Error::other("simulation failed"))
/// });
/// let bounds = Bounds::uniform(1, -1.0, 1.0).unwrap();
/// let result = HillClimbRunner::run(&objective, &bounds, &HillClimbConfig::default());
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, point: &[f64]) -> std::result::Result<f64, E> {
        (self.0)(point)
    }
}

/// Sphere benchmark: `f(x) = sum(x_i^2)`, global minimum 0 at the origin.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Evaluates `objective`, mapping evaluation failures and NaN into [`Error`].
pub(crate) fn evaluate<O: Objective + ?Sized>(objective: &O, point: &[f64]) -> Result<f64> {
    let value = objective
        .evaluate(point)
        .map_err(|e| Error::Objective(Box::new(e)))?;
    if value.is_nan() {
        return Err(Error::NanObjective {
            point: point.to_vec(),
        });
    }
    Ok(value)
}
