//! Construction-time simulation parameters.
//!
//! The core never reads the environment.  Applications build a `SimConfig`
//! (by hand, from a file, or from env vars) and pass it to the builder.

use crate::{HfError, HfResult};

/// Default probability of taking the unmaterialized edge when exactly one
/// forward candidate is new.
pub const DEFAULT_PREFER_NEW_PROBABILITY: f64 = 0.85;

/// Default time to animate one edge traversal.
pub const DEFAULT_EDGE_TRAVERSE_MS: u64 = 180;

/// Default pause at each vertex while travelling.
pub const DEFAULT_TRAVEL_DWELL_MS: u64 = 120;

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed and layout always produce the same run.
    pub seed: u64,

    /// Growth "prefer new edge" probability.  Clamped to [0, 1] once when
    /// the stepper is built.
    pub prefer_new_probability: f64,

    /// Duration of one animated edge traversal.  Must be positive.
    pub edge_traverse_ms: u64,

    /// Dwell after arriving at a vertex while in travel mode.
    pub travel_dwell_ms: u64,

    /// Number of agents registered at build time.
    pub agent_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                   0,
            prefer_new_probability: DEFAULT_PREFER_NEW_PROBABILITY,
            edge_traverse_ms:       DEFAULT_EDGE_TRAVERSE_MS,
            travel_dwell_ms:        DEFAULT_TRAVEL_DWELL_MS,
            agent_count:            1,
        }
    }
}

impl SimConfig {
    /// Convenience constructor: defaults with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// `prefer_new_probability` clamped to [0, 1]; NaN maps to the default.
    pub fn clamped_prefer_new_probability(&self) -> f64 {
        if self.prefer_new_probability.is_nan() {
            return DEFAULT_PREFER_NEW_PROBABILITY;
        }
        self.prefer_new_probability.clamp(0.0, 1.0)
    }

    /// Reject configurations the scheduler cannot run.
    pub fn validate(&self) -> HfResult<()> {
        if self.edge_traverse_ms == 0 {
            return Err(HfError::Config("edge_traverse_ms must be positive".into()));
        }
        if self.agent_count == 0 {
            return Err(HfError::Config("agent_count must be at least 1".into()));
        }
        Ok(())
    }
}
