//! Agent mode label shared by the stepper, scheduler, and output crates.
//!
//! This is the payload-free view of an agent's mode.  The stepper keeps the
//! travel plan inside its own tagged `Mode`; everything downstream only
//! needs to know which of the two modes is active.

/// The high-level behaviour an agent is currently in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentMode {
    /// Extending the maze by walking forward and preferring unmaterialized edges.
    #[default]
    Grow,
    /// Walking existing edges towards the nearest frontier vertex.
    Travel,
}

impl AgentMode {
    /// Human-readable label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentMode::Grow   => "grow",
            AgentMode::Travel => "travel",
        }
    }
}

impl std::fmt::Display for AgentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
