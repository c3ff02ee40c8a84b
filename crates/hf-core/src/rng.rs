//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! Every probabilistic decision in a run (start-edge choice, left/right
//! picks) draws from one explicitly seeded `SmallRng`, consumed in
//! invocation order across all agents.  Agents update in fixed registration
//! order, so a run is fully reproducible from its seed.  There is no ambient
//! or thread-local generator anywhere in the workspace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG shared by all agents of one run.
///
/// Single-threaded by construction.  Reseed with [`SimRng::reseed`] to replay
/// a run from the beginning.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Reset the stream to the state produced by `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.0 = SmallRng::seed_from_u64(seed);
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
