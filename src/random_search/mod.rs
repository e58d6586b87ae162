//! Random Local Search (RLS).
//!
//! Baseline without locality: each iteration draws a fresh, independent
//! point uniformly from the whole box and keeps it only if it strictly
//! improves on the best value so far.

mod config;
mod runner;

pub use config::RandomSearchConfig;
pub use runner::RandomSearchRunner;
