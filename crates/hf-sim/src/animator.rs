//! Per-agent presentation state machine.
//!
//! ```text
//!            step moved                    t ≥ 1
//!   Idle ─────────────────▶ Moving ──────────────────▶ Dwelling
//!     │                       ▲                           │
//!     │ step did not move     │ step moved                │ now ≥ until
//!     └──────▶ Dwelling(+1ms) └───────────────────────────┘
//!
//!   any step request with an empty frontier ──▶ Stopped (terminal)
//! ```
//!
//! The animator never decides anything about the maze: it asks the stepper
//! for exactly one discrete step per logical transition and interpolates
//! between the two vertices that step connected.

use hf_core::{AgentMode, Millis, PixelPoint, VertexKey};
use hf_graph::Graph;
use hf_grow::{Agent, FrontierPlanner, GrowthStepper, StepOutcome};
use hf_layout::Layout;

use crate::TimingConfig;

/// Retry delay after a step that did not move the agent.
pub const STALL_RETRY_MS: u64 = 1;

/// One animated hop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from:  VertexKey,
    pub to:    VertexKey,
    pub start: Millis,
    pub end:   Millis,
}

impl Move {
    /// Fraction of the move completed at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: Millis) -> f32 {
        let total = self.end.since(self.start).max(1);
        let elapsed = now.since(self.start);
        (elapsed as f64 / total as f64).clamp(0.0, 1.0) as f32
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Moving(Move),
    Dwelling { until: Millis },
    Stopped,
}

/// Interpolated position and phase of one agent.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    phase:     Phase,
    position:  PixelPoint,
    /// Agent mode right after the step that started the current move.
    last_mode: AgentMode,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Current pixel position.  Stays at the origin until the first step.
    #[inline]
    pub fn position(&self) -> PixelPoint {
        self.position
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    /// Advance to `now`, requesting at most one discrete step.
    ///
    /// Returns the step's outcome when one was requested.  A transition to
    /// `Stopped` reports [`StepOutcome::FrontierExhausted`].
    pub fn update<P: FrontierPlanner>(
        &mut self,
        now:     Millis,
        agent:   &mut Agent,
        layout:  &Layout,
        graph:   &mut Graph,
        stepper: &mut GrowthStepper<P>,
        timing:  &TimingConfig,
    ) -> Option<StepOutcome> {
        match self.phase {
            Phase::Stopped => None,
            Phase::Idle => Some(self.request_step(now, agent, layout, graph, stepper, timing)),
            Phase::Moving(mv) => {
                self.advance_move(now, mv, layout, timing);
                None
            }
            Phase::Dwelling { until } if now >= until => {
                Some(self.request_step(now, agent, layout, graph, stepper, timing))
            }
            Phase::Dwelling { .. } => None,
        }
    }

    fn advance_move(&mut self, now: Millis, mv: Move, layout: &Layout, timing: &TimingConfig) {
        let t = mv.progress(now);
        if t < 1.0 {
            self.position = layout.position(mv.from).lerp(layout.position(mv.to), t);
            return;
        }
        self.position = layout.position(mv.to);
        self.phase = Phase::Dwelling { until: now + timing.dwell_for(self.last_mode) };
    }

    fn request_step<P: FrontierPlanner>(
        &mut self,
        now:     Millis,
        agent:   &mut Agent,
        layout:  &Layout,
        graph:   &mut Graph,
        stepper: &mut GrowthStepper<P>,
        timing:  &TimingConfig,
    ) -> StepOutcome {
        if graph.frontier_is_empty() {
            self.phase = Phase::Stopped;
            return StepOutcome::FrontierExhausted;
        }

        let before = agent.heading();
        let outcome = stepper.step(agent, layout, graph);
        self.last_mode = agent.mode_kind();

        match agent.heading() {
            Some((prev, curr)) if agent.heading() != before => {
                self.position = layout.position(prev);
                self.phase = Phase::Moving(Move {
                    from:  prev,
                    to:    curr,
                    start: now,
                    end:   now + timing.edge_traverse_ms,
                });
            }
            heading => {
                if let Some((_, curr)) = heading {
                    self.position = layout.position(curr);
                }
                self.phase = Phase::Dwelling { until: now + STALL_RETRY_MS };
            }
        }
        outcome
    }
}
