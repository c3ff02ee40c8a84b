//! Per-agent simulation state.

use std::collections::VecDeque;

use hf_core::{AgentMode, VertexKey};

/// A cached route towards a frontier vertex.
///
/// `target_version` is the target's `VertexState::version` at planning time.
/// The plan is stale once the target's current version differs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelPlan {
    pub(crate) target:         VertexKey,
    pub(crate) target_version: u64,
    /// Upcoming vertices, excluding the agent's current vertex.
    pub(crate) path:           VecDeque<VertexKey>,
}

impl TravelPlan {
    pub fn target(&self) -> VertexKey {
        self.target
    }

    pub fn target_version(&self) -> u64 {
        self.target_version
    }

    /// Remaining hops; the last element is the target unless already there.
    pub fn path(&self) -> &VecDeque<VertexKey> {
        &self.path
    }

    /// `true` once every hop has been taken.
    pub fn is_complete(&self) -> bool {
        self.path.is_empty()
    }
}

/// What an agent is doing, with the payload only travel needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Grow,
    /// `None` until a plan is made, and again after a soft-cancel.
    Travel(Option<TravelPlan>),
}

impl Mode {
    /// The payload-free label used by rendering and output.
    #[inline]
    pub fn kind(&self) -> AgentMode {
        match self {
            Mode::Grow      => AgentMode::Grow,
            Mode::Travel(_) => AgentMode::Travel,
        }
    }
}

/// Simulation identity of one walker.
///
/// `prev` and `curr` are set together by the first step and are always a
/// static edge of the graph afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub(crate) heading: Option<(VertexKey, VertexKey)>,
    pub(crate) mode:    Mode,
}

impl Agent {
    /// An agent that has not taken its first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// An agent already standing on `curr`, having arrived from `prev`, in
    /// `Grow` mode.
    pub fn placed(prev: VertexKey, curr: VertexKey) -> Self {
        Self { heading: Some((prev, curr)), mode: Mode::Grow }
    }

    #[inline]
    pub fn curr(&self) -> Option<VertexKey> {
        self.heading.map(|(_, curr)| curr)
    }

    /// `(prev, curr)` once initialized.
    #[inline]
    pub fn heading(&self) -> Option<(VertexKey, VertexKey)> {
        self.heading
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.heading.is_some()
    }

    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub fn mode_kind(&self) -> AgentMode {
        self.mode.kind()
    }

    /// The cached travel plan, if travelling with one.
    pub fn travel_plan(&self) -> Option<&TravelPlan> {
        match &self.mode {
            Mode::Travel(plan) => plan.as_ref(),
            Mode::Grow         => None,
        }
    }

    /// Move one hop: `prev ← curr`, `curr ← next`.
    pub(crate) fn advance(&mut self, curr: VertexKey, next: VertexKey) {
        self.heading = Some((curr, next));
    }
}
