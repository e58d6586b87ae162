//! Box bounds and the bounded point sampler.

use crate::error::{Error, Result};
use rand::Rng;

/// Axis-aligned feasible region: one `(lo, hi)` interval per dimension.
///
/// Construction validates every interval, so a `Bounds` value is always
/// non-empty with finite `lo <= hi` and a finite width in each dimension.
///
/// # Examples
///
/// ```
/// use u_localsearch::Bounds;
///
/// let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
/// assert_eq!(bounds.dim(), 2);
/// assert!(Bounds::new(vec![(1.0, 0.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct Bounds {
    intervals: Vec<(f64, f64)>,
}

impl Bounds {
    /// Validates and wraps per-dimension intervals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBounds`] for an empty list and
    /// [`Error::InvalidBounds`] when `lo > hi` or either the ends or the
    /// width `hi - lo` are not finite.
    pub fn new(intervals: Vec<(f64, f64)>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(Error::EmptyBounds);
        }
        for (dim, &(lo, hi)) in intervals.iter().enumerate() {
            if !lo.is_finite() || !hi.is_finite() || lo > hi || !(hi - lo).is_finite() {
                return Err(Error::InvalidBounds { dim, lo, hi });
            }
        }
        Ok(Self { intervals })
    }

    /// Same box in every one of `dim` dimensions.
    pub fn uniform(dim: usize, lo: f64, hi: f64) -> Result<Self> {
        Self::new(vec![(lo, hi); dim])
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.intervals.len()
    }

    /// The validated `(lo, hi)` pairs, one per dimension.
    pub fn intervals(&self) -> &[(f64, f64)] {
        &self.intervals
    }

    /// Draws a point uniformly from the box, one independent draw per dimension.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.dim()).map(|i| self.sample_dim(i, rng)).collect()
    }

    /// Draws a single coordinate uniformly from `[lo_i, hi_i]`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.dim()`.
    pub fn sample_dim<R: Rng>(&self, i: usize, rng: &mut R) -> f64 {
        let (lo, hi) = self.intervals[i];
        // Scale a unit draw by the width; rounding can land a hair past `hi`
        let u: f64 = rng.random_range(0.0..=1.0);
        (lo + u * (hi - lo)).clamp(lo, hi)
    }

    /// Clamps a single coordinate into dimension `i`'s interval.
    pub fn clamp_dim(&self, i: usize, x: f64) -> f64 {
        let (lo, hi) = self.intervals[i];
        x.clamp(lo, hi)
    }

    /// Clamps every coordinate of `point` in place.
    ///
    /// # Panics
    ///
    /// Panics if `point.len() != self.dim()`.
    pub fn clamp(&self, point: &mut [f64]) {
        assert_eq!(point.len(), self.dim(), "point dimension mismatch");
        for (i, x) in point.iter_mut().enumerate() {
            *x = self.clamp_dim(i, *x);
        }
    }

    /// Returns `true` if `point` has the right dimension and lies inside the box.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dim()
            && point
                .iter()
                .zip(&self.intervals)
                .all(|(&x, &(lo, hi))| lo <= x && x <= hi)
    }
}

impl TryFrom<Vec<(f64, f64)>> for Bounds {
    type Error = Error;

    fn try_from(intervals: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(intervals)
    }
}

impl From<Bounds> for Vec<(f64, f64)> {
    fn from(bounds: Bounds) -> Self {
        bounds.intervals
    }
}

impl TryFrom<&[(f64, f64)]> for Bounds {
    type Error = Error;

    fn try_from(intervals: &[(f64, f64)]) -> Result<Self> {
        Self::new(intervals.to_vec())
    }
}
