//! The multi-agent scheduler.

use tracing::{info, trace};

use hf_core::{AgentId, Millis};
use hf_graph::Graph;
use hf_grow::{Agent, BfsPlanner, FrontierPlanner, GrowthStepper, StepOutcome};
use hf_layout::Layout;

use crate::render::AgentDrawable;
use crate::{Animator, NoopObserver, SimError, SimObserver, SimResult, SimView, TimingConfig};

/// One registered agent: its simulation state and its animator.
#[derive(Clone, Debug)]
pub struct AgentRuntime {
    pub(crate) agent:    Agent,
    pub(crate) animator: Animator,
}

impl AgentRuntime {
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn drawable(&self) -> AgentDrawable {
        AgentDrawable { position: self.animator.position(), mode: self.agent.mode_kind() }
    }
}

/// Drives every agent's animator against one shared clock.
///
/// Agents update in registration order.  All of them share one stepper and
/// therefore one decision RNG.
pub struct Controller<P: FrontierPlanner = BfsPlanner> {
    stepper:  GrowthStepper<P>,
    timing:   TimingConfig,
    runtimes: Vec<AgentRuntime>,
}

impl<P: FrontierPlanner> Controller<P> {
    pub fn new(stepper: GrowthStepper<P>, timing: TimingConfig) -> Self {
        Self { stepper, timing, runtimes: Vec::new() }
    }

    /// Register `agent` after all existing ones.
    pub fn add_agent(&mut self, agent: Agent) -> SimResult<AgentId> {
        let id = AgentId::try_from(self.runtimes.len())
            .map_err(|_| SimError::TooManyAgents(self.runtimes.len() + 1))?;
        self.runtimes.push(AgentRuntime { agent, animator: Animator::new() });
        Ok(id)
    }

    pub fn agent_count(&self) -> usize {
        self.runtimes.len()
    }

    /// # Panics
    ///
    /// If `id` was not returned by [`add_agent`][Self::add_agent].
    pub fn runtime(&self, id: AgentId) -> &AgentRuntime {
        &self.runtimes[id.index()]
    }

    /// `true` once every registered agent has stopped.
    pub fn all_stopped(&self) -> bool {
        self.runtimes.iter().all(|rt| rt.animator.is_stopped())
    }

    /// Marker state per agent, in registration order.
    pub fn drawables(&self) -> Vec<AgentDrawable> {
        self.runtimes.iter().map(AgentRuntime::drawable).collect()
    }

    pub fn view<'a>(&'a self, layout: &'a Layout, graph: &'a Graph) -> SimView<'a> {
        SimView::new(layout, graph, &self.runtimes)
    }

    /// One scheduler tick at `now`.
    pub fn update(&mut self, now: Millis, layout: &Layout, graph: &mut Graph) {
        self.update_observed(now, layout, graph, &mut NoopObserver);
    }

    /// One scheduler tick at `now`, reporting steps and stops to `observer`.
    pub fn update_observed<O: SimObserver>(
        &mut self,
        now:      Millis,
        layout:   &Layout,
        graph:    &mut Graph,
        observer: &mut O,
    ) {
        for (i, rt) in self.runtimes.iter_mut().enumerate() {
            let id = AgentId(i as u32);
            let Some(outcome) =
                rt.animator.update(now, &mut rt.agent, layout, graph, &mut self.stepper, &self.timing)
            else {
                continue;
            };
            if outcome == StepOutcome::FrontierExhausted {
                info!(agent = %id, %now, active_edges = graph.active_edge_count(), "agent stopped");
                observer.on_agent_stopped(id, now);
            } else {
                trace!(agent = %id, %now, ?outcome, heading = ?rt.agent.heading(), "step");
                observer.on_step(id, outcome, &rt.agent);
            }
        }
    }
}
