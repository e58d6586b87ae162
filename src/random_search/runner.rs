//! Random local search execution loop.

use super::config::RandomSearchConfig;
use crate::bounds::Bounds;
use crate::error::Result;
use crate::objective::{evaluate, Objective};
use crate::random::rng_from_seed;
use crate::result::{SearchResult, StopReason};
use rand::Rng;
use tracing::{debug, trace};

/// Executes random local search.
pub struct RandomSearchRunner;

impl RandomSearchRunner {
    /// Runs random local search with a generator seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        bounds: &Bounds,
        config: &RandomSearchConfig,
    ) -> Result<SearchResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs random local search drawing from the caller's generator.
    pub fn run_with_rng<O: Objective + ?Sized, R: Rng>(
        objective: &O,
        bounds: &Bounds,
        config: &RandomSearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;

        let mut best = bounds.sample(rng);
        let mut best_value = evaluate(objective, &best)?;

        let mut iterations = 0usize;
        let mut evaluations = 1usize;
        let mut improvements = 0usize;
        let mut stop_reason = StopReason::MaxIterations;

        for _ in 0..config.max_iterations {
            let previous_value = best_value;

            let candidate = bounds.sample(rng);
            let candidate_value = evaluate(objective, &candidate)?;
            evaluations += 1;
            iterations += 1;

            if candidate_value < best_value {
                best = candidate;
                best_value = candidate_value;
                improvements += 1;
                trace!(iteration = iterations, value = best_value, "random search improved");
            }

            if (previous_value - best_value).abs() < config.epsilon {
                stop_reason = StopReason::Converged;
                break;
            }
        }

        debug!(
            iterations,
            evaluations,
            improvements,
            best_value,
            ?stop_reason,
            "random search finished"
        );

        Ok(SearchResult {
            best,
            best_value,
            iterations,
            evaluations,
            improvements,
            stop_reason,
        })
    }
}
