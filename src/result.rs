//! Outcome of a local search run.

/// Why a search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The iteration budget was exhausted.
    MaxIterations,

    /// The tracked value changed by less than epsilon in one iteration.
    Converged,

    /// Simulated annealing's temperature dropped below its floor.
    TemperatureFloor,
}

/// Result of a hill climbing or random local search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The best point found. Always inside the bounds.
    pub best: Vec<f64>,

    /// Objective value at `best`.
    pub best_value: f64,

    /// Number of loop iterations executed.
    pub iterations: usize,

    /// Number of objective evaluations, including the initial point.
    pub evaluations: usize,

    /// Number of strictly improving moves.
    pub improvements: usize,

    /// Why the loop stopped.
    pub stop_reason: StopReason,
}

impl SearchResult {
    /// Discards the run statistics, keeping the `(point, value)` pair.
    pub fn into_pair(self) -> (Vec<f64>, f64) {
        (self.best, self.best_value)
    }
}
