//! Hill Climbing (HC).
//!
//! Stochastic first-improvement descent with one neighbor per iteration.
//! Every coordinate of the current point is shifted by an independent
//! uniform draw from `[-step_size, step_size]` and clamped back into the
//! box. The neighbor replaces the current point only on strict improvement.
//!
//! # References
//!
//! - Russell & Norvig, "Artificial Intelligence: A Modern Approach", ch. 4

mod config;
mod runner;

pub use config::HillClimbConfig;
pub use runner::HillClimbRunner;
