//! Random stream construction.
//!
//! Every runner owns its random stream for the duration of a call, so two
//! searches never share generator state. Use [`create_rng`] with a fixed
//! seed for reproducible runs.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded random number generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh seed on `None`.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
