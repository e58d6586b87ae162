//! Stochastic local search for bounded continuous minimization.
//!
//! Minimizes a black-box objective `f: R^n -> R` over an axis-aligned box
//! without gradient information:
//!
//! - **Hill Climbing (HC)**: perturbs every coordinate of the current point
//!   and moves only on strict improvement.
//! - **Random Local Search (RLS)**: draws independent uniform points from
//!   the whole box and keeps the best. Useful as a baseline.
//! - **Simulated Annealing (SA)**: perturbs one coordinate at a time and
//!   accepts worsening moves with the Metropolis criterion under a cooling
//!   temperature.
//!
//! Each optimizer is a `config` + `runner` pair. Runners own their random
//! stream for the duration of a call, so independent calls are reentrant
//! and reproducible from a seed.
//!
//! # Examples
//!
//! ```
//! use u_localsearch::{objective::sphere, Bounds, SaConfig, SaRunner};
//!
//! let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
//! let config = SaConfig::default().with_seed(42);
//! let result = SaRunner::run(&sphere, &bounds, &config).unwrap();
//! assert!(bounds.contains(&result.best));
//! ```

pub mod bounds;
pub mod error;
pub mod hill_climbing;
pub mod objective;
pub mod random;
pub mod random_search;
pub mod result;
pub mod sa;

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use hill_climbing::{HillClimbConfig, HillClimbRunner};
pub use objective::Objective;
pub use random_search::{RandomSearchConfig, RandomSearchRunner};
pub use result::{SearchResult, StopReason};
pub use sa::{CoolingSchedule, SaConfig, SaResult, SaRunner};

/// Hill climbing with positional parameters and a fresh random seed.
///
/// # Errors
///
/// Fails on invalid bounds or parameters before evaluating the objective,
/// or with the first objective failure.
pub fn hill_climb<O: Objective + ?Sized>(
    objective: &O,
    bounds: &[(f64, f64)],
    iterations: usize,
    epsilon: f64,
    step_size: f64,
) -> Result<(Vec<f64>, f64)> {
    let bounds = Bounds::try_from(bounds)?;
    let config = HillClimbConfig::default()
        .with_max_iterations(iterations)
        .with_epsilon(epsilon)
        .with_step_size(step_size);
    HillClimbRunner::run(objective, &bounds, &config).map(SearchResult::into_pair)
}

/// Random local search with positional parameters and a fresh random seed.
pub fn random_local_search<O: Objective + ?Sized>(
    objective: &O,
    bounds: &[(f64, f64)],
    iterations: usize,
    epsilon: f64,
) -> Result<(Vec<f64>, f64)> {
    let bounds = Bounds::try_from(bounds)?;
    let config = RandomSearchConfig::default()
        .with_max_iterations(iterations)
        .with_epsilon(epsilon);
    RandomSearchRunner::run(objective, &bounds, &config).map(SearchResult::into_pair)
}

/// Simulated annealing with geometric cooling, positional parameters and a
/// fresh random seed. `epsilon` is the temperature floor.
pub fn simulated_annealing<O: Objective + ?Sized>(
    objective: &O,
    bounds: &[(f64, f64)],
    iterations: usize,
    initial_temperature: f64,
    cooling_rate: f64,
    epsilon: f64,
) -> Result<(Vec<f64>, f64)> {
    let bounds = Bounds::try_from(bounds)?;
    let config = SaConfig::default()
        .with_max_iterations(iterations)
        .with_initial_temperature(initial_temperature)
        .with_cooling_rate(cooling_rate)
        .with_min_temperature(epsilon);
    SaRunner::run(objective, &bounds, &config).map(SaResult::into_pair)
}
