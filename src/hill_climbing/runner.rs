//! Hill climbing execution loop.

use super::config::HillClimbConfig;
use crate::bounds::Bounds;
use crate::error::Result;
use crate::objective::{evaluate, Objective};
use crate::random::rng_from_seed;
use crate::result::{SearchResult, StopReason};
use rand::Rng;
use tracing::{debug, trace};

/// Executes hill climbing.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs hill climbing with a generator seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) for a bad
    /// configuration, or the first objective failure.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        bounds: &Bounds,
        config: &HillClimbConfig,
    ) -> Result<SearchResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs hill climbing drawing from the caller's generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<O: Objective + ?Sized, R: Rng>(
        objective: &O,
        bounds: &Bounds,
        config: &HillClimbConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;

        let mut current = bounds.sample(rng);
        let mut current_value = evaluate(objective, &current)?;
        let mut neighbor = vec![0.0; bounds.dim()];

        let mut iterations = 0usize;
        let mut evaluations = 1usize;
        let mut improvements = 0usize;
        let mut stop_reason = StopReason::MaxIterations;

        for _ in 0..config.max_iterations {
            let previous_value = current_value;

            // Perturb every coordinate, clamp into the box
            for (i, (n, &x)) in neighbor.iter_mut().zip(&current).enumerate() {
                let step = rng.random_range(-1.0..=1.0) * config.step_size;
                *n = bounds.clamp_dim(i, x + step);
            }

            let neighbor_value = evaluate(objective, &neighbor)?;
            evaluations += 1;
            iterations += 1;

            if neighbor_value < current_value {
                std::mem::swap(&mut current, &mut neighbor);
                current_value = neighbor_value;
                improvements += 1;
                trace!(iteration = iterations, value = current_value, "hill climbing improved");
            }

            if (previous_value - current_value).abs() < config.epsilon {
                stop_reason = StopReason::Converged;
                break;
            }
        }

        debug!(
            iterations,
            evaluations,
            improvements,
            best_value = current_value,
            ?stop_reason,
            "hill climbing finished"
        );

        Ok(SearchResult {
            best: current,
            best_value: current_value,
            iterations,
            evaluations,
            improvements,
            stop_reason,
        })
    }
}
