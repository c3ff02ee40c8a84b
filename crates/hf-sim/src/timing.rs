//! Animation timing.

use hf_core::config::{DEFAULT_EDGE_TRAVERSE_MS, DEFAULT_TRAVEL_DWELL_MS};
use hf_core::{AgentMode, SimConfig};

/// How long moves and pauses last, in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingConfig {
    /// Duration of one animated edge traversal.  Positive.
    pub edge_traverse_ms: u64,
    /// Pause after each hop taken while travelling.
    pub travel_dwell_ms:  u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            edge_traverse_ms: DEFAULT_EDGE_TRAVERSE_MS,
            travel_dwell_ms:  DEFAULT_TRAVEL_DWELL_MS,
        }
    }
}

impl TimingConfig {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            edge_traverse_ms: config.edge_traverse_ms,
            travel_dwell_ms:  config.travel_dwell_ms,
        }
    }

    /// Dwell after a completed move, keyed by the mode observed right after
    /// the step that started it.
    #[inline]
    pub fn dwell_for(&self, mode: AgentMode) -> u64 {
        match mode {
            AgentMode::Travel => self.travel_dwell_ms,
            AgentMode::Grow   => 0,
        }
    }
}
