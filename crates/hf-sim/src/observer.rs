//! Simulation observer trait for progress reporting and data collection.

use hf_core::{AgentId, Millis};
use hf_grow::{Agent, StepOutcome};

use crate::SimView;

/// Callbacks invoked by the controller and by
/// [`Simulation::run_until`][crate::Simulation::run_until].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: step counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Moves(usize);
///
/// impl SimObserver for Moves {
///     fn on_step(&mut self, _agent: AgentId, outcome: StepOutcome, _state: &Agent) {
///         if outcome.moved() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every discrete step an animator requested.
    fn on_step(&mut self, _agent: AgentId, _outcome: StepOutcome, _state: &Agent) {}

    /// Called once per agent, when its animator enters `Stopped`.
    fn on_agent_stopped(&mut self, _agent: AgentId, _now: Millis) {}

    /// Called after every frame of `run_until`, with the state all agents
    /// reached at `now`.
    fn on_frame_end(&mut self, _now: Millis, _view: &SimView<'_>) {}

    /// Called once when `run_until` returns.
    fn on_sim_end(&mut self, _now: Millis, _view: &SimView<'_>) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
