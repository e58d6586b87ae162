//! SA execution loop.

use super::config::SaConfig;
use crate::bounds::Bounds;
use crate::error::Result;
use crate::objective::{evaluate, Objective};
use crate::random::rng_from_seed;
use crate::result::StopReason;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best point found (not the last accepted one).
    pub best: Vec<f64>,

    /// Objective value at `best`.
    pub best_value: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Number of objective evaluations, including the initial point.
    pub evaluations: usize,

    /// Number of improving moves.
    pub improvements: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Why the loop stopped.
    pub stop_reason: StopReason,
}

impl SaResult {
    /// Discards the run statistics, keeping the `(point, value)` pair.
    pub fn into_pair(self) -> (Vec<f64>, f64) {
        (self.best, self.best_value)
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization with a generator seeded from `config.seed`.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        bounds: &Bounds,
        config: &SaConfig,
    ) -> Result<SaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs SA drawing from the caller's generator.
    pub fn run_with_rng<O: Objective + ?Sized, R: Rng>(
        objective: &O,
        bounds: &Bounds,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult> {
        config.validate()?;

        // Initialize
        let mut current = bounds.sample(rng);
        let mut current_value = evaluate(objective, &current)?;
        let mut best = current.clone();
        let mut best_value = current_value;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut evaluations = 1usize;
        let mut improvements = 0usize;
        let mut accepted_moves = 0usize;
        let mut stop_reason = StopReason::MaxIterations;

        for _ in 0..config.max_iterations {
            // A temperature at or below zero (or NaN) ends the run
            if temperature <= 0.0 || temperature.is_nan() {
                stop_reason = StopReason::TemperatureFloor;
                break;
            }

            // Move one randomly chosen coordinate, remembering it for rollback
            let dim = rng.random_range(0..bounds.dim());
            let previous_x = current[dim];
            let step = rng.random_range(-1.0..=1.0) * config.perturbation;
            current[dim] = bounds.clamp_dim(dim, previous_x + step);

            let neighbor_value = evaluate(objective, &current)?;
            evaluations += 1;
            iterations += 1;

            let delta = neighbor_value - current_value;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improvements += 1;
                true
            } else if temperature > 0.0 {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current_value = neighbor_value;
                accepted_moves += 1;

                if current_value < best_value {
                    best.copy_from_slice(&current);
                    best_value = current_value;
                    trace!(
                        iteration = iterations,
                        value = best_value,
                        temperature,
                        "sa improved best"
                    );
                }
            } else {
                current[dim] = previous_x;
            }

            // Cool down
            temperature = config.cooling.cool(temperature);
            if temperature < config.min_temperature {
                stop_reason = StopReason::TemperatureFloor;
                break;
            }
        }

        debug!(
            iterations,
            evaluations,
            accepted_moves,
            best_value,
            final_temperature = temperature,
            ?stop_reason,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best,
            best_value,
            iterations,
            evaluations,
            improvements,
            accepted_moves,
            final_temperature: temperature,
            stop_reason,
        })
    }
}
