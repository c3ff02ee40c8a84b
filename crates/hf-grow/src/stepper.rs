//! The discrete growth/travel stepper.

use tracing::{debug, trace};

use hf_core::config::DEFAULT_PREFER_NEW_PROBABILITY;
use hf_core::{SimConfig, SimRng, VertexKey};
use hf_graph::Graph;
use hf_layout::Layout;

use crate::agent::{Agent, Mode, TravelPlan};
use crate::planner::{BfsPlanner, FrontierPlanner};
use crate::steer::order_left_right;

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// What one call to [`GrowthStepper::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// No frontier vertex is left; nothing changed.
    FrontierExhausted,
    /// The agent was placed on a random start edge.
    Started,
    /// One growth hop.  `new_edge` is `true` if the hop materialized its edge.
    Grew { new_edge: bool },
    /// One hop along a travel route.  `replanned` is `true` if the route was
    /// computed during this call.
    Travelled { replanned: bool },
    /// The agent was already on the frontier and went back to growing
    /// without moving.
    Resumed,
    /// Growth was blocked and no frontier vertex is reachable.  Nothing
    /// changed; a later call retries.
    Stalled,
}

impl StepOutcome {
    /// `true` if the agent's `(prev, curr)` changed.
    #[inline]
    pub fn moved(self) -> bool {
        matches!(
            self,
            StepOutcome::Started | StepOutcome::Grew { .. } | StepOutcome::Travelled { .. }
        )
    }
}

// ── GrowthStepper ─────────────────────────────────────────────────────────────

/// Advances agents one hop at a time.
///
/// Owns the run's single decision RNG.  Every agent is stepped through the
/// same stepper, so draws are consumed in invocation order and a run is
/// reproducible from the seed alone.
pub struct GrowthStepper<P: FrontierPlanner = BfsPlanner> {
    rng:        SimRng,
    prefer_new: f64,
    planner:    P,
}

impl GrowthStepper<BfsPlanner> {
    /// `prefer_new_probability` is clamped to [0, 1] here and never again.
    pub fn new(rng: SimRng, prefer_new_probability: f64) -> Self {
        Self::with_planner(rng, prefer_new_probability, BfsPlanner)
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(SimRng::new(config.seed), config.clamped_prefer_new_probability())
    }
}

impl<P: FrontierPlanner> GrowthStepper<P> {
    pub fn with_planner(rng: SimRng, prefer_new_probability: f64, planner: P) -> Self {
        let prefer_new = if prefer_new_probability.is_nan() {
            DEFAULT_PREFER_NEW_PROBABILITY
        } else {
            prefer_new_probability.clamp(0.0, 1.0)
        };
        Self { rng, prefer_new, planner }
    }

    pub fn prefer_new_probability(&self) -> f64 {
        self.prefer_new
    }

    /// Advance `agent` by at most one hop.
    ///
    /// A blocked growth attempt switches the agent to travel and makes the
    /// first travel attempt within the same call.
    pub fn step(&mut self, agent: &mut Agent, layout: &Layout, graph: &mut Graph) -> StepOutcome {
        if graph.frontier_is_empty() {
            return StepOutcome::FrontierExhausted;
        }
        let Some((prev, curr)) = agent.heading else {
            return self.start(agent, graph);
        };

        if agent.mode == Mode::Grow {
            if let Some(next) = self.choose_growth(layout, graph, prev, curr) {
                let new_edge = graph.ensure_edge_exists(curr, next);
                graph.record_traversal(curr, next);
                agent.advance(curr, next);
                trace!(from = %curr, to = %next, new_edge, "grew");
                return StepOutcome::Grew { new_edge };
            }
            debug!(vertex = %curr, "growth blocked; switching to travel");
            agent.mode = Mode::Travel(None);
        }

        self.travel(agent, graph, curr)
    }

    /// Place an uninitialized agent on a random directed start edge.
    fn start(&mut self, agent: &mut Agent, graph: &mut Graph) -> StepOutcome {
        // A non-empty frontier implies some vertex has an incident edge.
        let Some((from, to)) = graph.choose_random_start_edge(&mut self.rng) else {
            return StepOutcome::Stalled;
        };
        graph.ensure_edge_exists(from, to);
        graph.record_traversal(from, to);
        agent.heading = Some((from, to));
        agent.mode = Mode::Grow;
        trace!(from = %from, to = %to, "started");
        StepOutcome::Started
    }

    /// Pick the next growth vertex, or `None` if blocked.
    fn choose_growth(
        &mut self,
        layout: &Layout,
        graph:  &Graph,
        prev:   VertexKey,
        curr:   VertexKey,
    ) -> Option<VertexKey> {
        let mut forward = graph.neighbors(curr).iter().copied().filter(|&n| n != prev);
        let first = forward.next()?;
        let Some(second) = forward.next() else {
            return Some(first);
        };
        let (left, right) = order_left_right(layout, prev, curr, first, second);
        self.choose_between(graph, curr, left, right)
    }

    /// The "prefer new edge" rule for two ordered candidates.
    pub(crate) fn choose_between(
        &mut self,
        graph: &Graph,
        curr:  VertexKey,
        left:  VertexKey,
        right: VertexKey,
    ) -> Option<VertexKey> {
        let left_new = !graph.edge_state(curr, left).exists();
        let right_new = !graph.edge_state(curr, right).exists();
        match (left_new, right_new) {
            (true, false) => Some(if self.rng.gen_bool(self.prefer_new) { left } else { right }),
            (false, true) => Some(if self.rng.gen_bool(self.prefer_new) { right } else { left }),
            (true, true) => Some(if self.rng.gen_bool(0.5) { left } else { right }),
            (false, false) => None,
        }
    }

    /// One travel hop, planning first if there is no usable plan.
    fn travel(&mut self, agent: &mut Agent, graph: &mut Graph, curr: VertexKey) -> StepOutcome {
        let mut cached = match std::mem::take(&mut agent.mode) {
            Mode::Travel(plan) => plan,
            Mode::Grow => None,
        };

        if let Some(plan) = &cached {
            let current = graph.vertex_state(plan.target).version();
            if current != plan.target_version {
                debug!(
                    vertex = %plan.target,
                    planned = plan.target_version,
                    current,
                    "travel target closed; dropping plan"
                );
                cached = None;
            }
        }

        let mut replanned = false;
        let mut plan = match cached {
            Some(plan) if !plan.is_complete() => plan,
            _ => match self.planner.plan(graph, curr) {
                Some(route) => {
                    replanned = true;
                    TravelPlan {
                        target:         route.target,
                        target_version: graph.vertex_state(route.target).version(),
                        path:           route.path,
                    }
                }
                None => {
                    debug!(vertex = %curr, "no reachable frontier vertex");
                    agent.mode = Mode::Travel(None);
                    return StepOutcome::Stalled;
                }
            },
        };

        let mut at = curr;
        if let Some(next) = plan.path.pop_front() {
            debug_assert!(graph.edge_state(curr, next).exists(), "travel hop over a missing edge");
            graph.record_traversal(curr, next);
            agent.advance(curr, next);
            at = next;
            trace!(from = %curr, to = %next, replanned, "travelled");
        }

        if at == plan.target && plan.is_complete() {
            debug!(vertex = %at, "reached frontier; switching to growth");
            agent.mode = Mode::Grow;
        } else {
            agent.mode = Mode::Travel(Some(plan));
        }

        if at == curr { StepOutcome::Resumed } else { StepOutcome::Travelled { replanned } }
    }
}
