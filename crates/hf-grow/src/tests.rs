//! Unit tests for hf-grow.

use hf_core::{PixelPoint, SimRng, VertexKey};
use hf_graph::Graph;
use hf_layout::{Layout, LayoutBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn v(q: i32, r: i32) -> VertexKey {
    VertexKey::new(q, r)
}

fn layout_of(vertices: &[(VertexKey, (f32, f32))], edges: &[(VertexKey, VertexKey)]) -> Layout {
    let mut b = LayoutBuilder::new();
    for &(key, px) in vertices {
        b.add_vertex(key, PixelPoint::from(px));
    }
    for &(a, b_) in edges {
        b.add_edge(a, b_);
    }
    b.build().unwrap()
}

// Line fixture A–B–C–D–E–G laid out left to right.
const A: VertexKey = VertexKey { q: 0, r: 0 };
const B: VertexKey = VertexKey { q: 1, r: 0 };
const C: VertexKey = VertexKey { q: 2, r: 0 };
const D: VertexKey = VertexKey { q: 3, r: 0 };
const E: VertexKey = VertexKey { q: 4, r: 0 };
const G: VertexKey = VertexKey { q: 5, r: 0 };

fn line(keys: &[VertexKey]) -> Layout {
    let vertices: Vec<_> = keys.iter().map(|&k| (k, (k.q as f32 * 50.0, 0.0))).collect();
    let edges: Vec<_> = keys.windows(2).map(|w| (w[0], w[1])).collect();
    layout_of(&vertices, &edges)
}

/// Fork: the agent arrives at `HUB` from `TAIL` below; `LEFT` and `RIGHT`
/// branch up-left and up-right on screen.
///
/// ```text
///   LEFT(20,20)   RIGHT(80,20)
///          \       /
///          HUB(50,50)
///              |
///          TAIL(50,100)
/// ```
const TAIL: VertexKey = VertexKey { q: 0, r: 0 };
const HUB: VertexKey = VertexKey { q: 0, r: 1 };
const LEFT: VertexKey = VertexKey { q: -1, r: 2 };
const RIGHT: VertexKey = VertexKey { q: 1, r: 2 };

fn fork() -> Layout {
    layout_of(
        &[
            (TAIL, (50.0, 100.0)),
            (HUB, (50.0, 50.0)),
            (LEFT, (20.0, 20.0)),
            (RIGHT, (80.0, 20.0)),
        ],
        // RIGHT enumerates before LEFT.
        &[(HUB, TAIL), (HUB, RIGHT), (HUB, LEFT)],
    )
}

// ── Steering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod steer_tests {
    use super::*;
    use crate::{cross_z, order_left_right};

    #[test]
    fn cross_sign() {
        assert_eq!(cross_z((1.0, 0.0), (0.0, 1.0)), 1.0);
        assert_eq!(cross_z((1.0, 0.0), (0.0, -1.0)), -1.0);
        assert_eq!(cross_z((2.0, 2.0), (1.0, 1.0)), 0.0);
    }

    #[test]
    fn left_is_left_on_screen() {
        let layout = fork();
        assert_eq!(order_left_right(&layout, TAIL, HUB, RIGHT, LEFT), (LEFT, RIGHT));
        assert_eq!(order_left_right(&layout, TAIL, HUB, LEFT, RIGHT), (LEFT, RIGHT));
    }

    #[test]
    fn heading_down_the_left_branch() {
        // Heading south-east from LEFT: RIGHT lies to the agent's left.
        let layout = fork();
        assert_eq!(order_left_right(&layout, LEFT, HUB, TAIL, RIGHT), (RIGHT, TAIL));
    }

    #[test]
    fn tie_keeps_enumeration_order() {
        let near = v(0, 2);
        let far = v(0, 3);
        let layout = layout_of(
            &[(TAIL, (50.0, 100.0)), (HUB, (50.0, 50.0)), (near, (50.0, 20.0)), (far, (50.0, 0.0))],
            &[],
        );
        assert_eq!(order_left_right(&layout, TAIL, HUB, far, near), (far, near));
        assert_eq!(order_left_right(&layout, TAIL, HUB, near, far), (near, far));
    }
}

// ── BFS planner ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner_tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::{BfsPlanner, FrontierPlanner};

    #[test]
    fn nearest_frontier_along_existing_edges() {
        let layout = line(&[A, B, C, D, E]);
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(A, B);
        g.ensure_edge_exists(B, C);
        g.ensure_edge_exists(C, D);
        // D still has D–E open; A, B, C are closed.
        let route = BfsPlanner.plan(&g, A).unwrap();
        assert_eq!(route.target, D);
        assert_eq!(route.path, VecDeque::from([B, C, D]));
        assert!(!route.is_trivial());
    }

    #[test]
    fn start_on_frontier_is_trivial() {
        let layout = line(&[A, B, C]);
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(A, B);
        let route = BfsPlanner.plan(&g, B).unwrap();
        assert_eq!(route.target, B);
        assert!(route.is_trivial());
    }

    #[test]
    fn unreachable_frontier_is_none() {
        // A–B closed; C–D is a separate, untouched component.
        let layout = layout_of(
            &[(A, (0.0, 0.0)), (B, (50.0, 0.0)), (C, (100.0, 0.0)), (D, (150.0, 0.0))],
            &[(A, B), (C, D)],
        );
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(A, B);
        assert!(!g.frontier_is_empty());
        assert!(BfsPlanner.plan(&g, A).is_none());
    }

    #[test]
    fn stops_at_first_frontier_vertex() {
        let layout = line(&[A, B, C]);
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(A, B);
        let route = BfsPlanner.plan(&g, A).unwrap();
        assert_eq!(route.target, B);
        assert_eq!(route.path, VecDeque::from([B]));
    }
}

// ── Stepper ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stepper_tests {
    use std::collections::VecDeque;

    use hf_core::{AgentMode, SimConfig};

    use super::*;
    use crate::{Agent, GrowthStepper, Mode, StepOutcome};

    fn stepper(seed: u64) -> GrowthStepper {
        GrowthStepper::new(SimRng::new(seed), 0.85)
    }

    #[test]
    fn first_step_places_agent_on_start_edge() {
        let layout = line(&[A, B, C, D]);
        let mut g = Graph::from_layout(&layout);
        let mut agent = Agent::new();
        assert!(!agent.is_initialized());

        let outcome = stepper(3).step(&mut agent, &layout, &mut g);
        assert_eq!(outcome, StepOutcome::Started);
        let (prev, curr) = agent.heading().unwrap();
        assert!(g.has_edge(prev, curr));
        assert!(g.edge_state(prev, curr).exists());
        assert_eq!(g.edge_state(prev, curr).traffic(), 1);
        assert_eq!(g.vertex_state(curr).visit_count(), 1);
        assert_eq!(agent.mode_kind(), AgentMode::Grow);
        assert!(g.recount_frontier() == g.frontier_count());
    }

    #[test]
    fn exhausted_frontier_is_a_no_op() {
        let layout = line(&[A, B]);
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(A, B);
        let mut agent = Agent::new();
        let outcome = stepper(1).step(&mut agent, &layout, &mut g);
        assert_eq!(outcome, StepOutcome::FrontierExhausted);
        assert!(!outcome.moved());
        assert_eq!(agent, Agent::new());
    }

    #[test]
    fn single_forward_candidate_is_taken_even_if_existing() {
        let layout = line(&[A, B, C, D]);
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(B, C);
        let mut agent = Agent::placed(A, B);
        let outcome = stepper(1).step(&mut agent, &layout, &mut g);
        assert_eq!(outcome, StepOutcome::Grew { new_edge: false });
        assert_eq!(agent.heading(), Some((B, C)));
        assert_eq!(g.edge_state(B, C).traffic(), 1);
        assert_eq!(g.vertex_state(C).visit_count(), 1);
    }

    #[test]
    fn growth_materializes_new_edge() {
        let layout = line(&[A, B, C, D]);
        let mut g = Graph::from_layout(&layout);
        let mut agent = Agent::placed(A, B);
        let outcome = stepper(1).step(&mut agent, &layout, &mut g);
        assert_eq!(outcome, StepOutcome::Grew { new_edge: true });
        assert!(g.edge_state(B, C).exists());
        assert_eq!(g.active_edge_count(), 1);
    }

    #[test]
    fn neither_new_is_blocked() {
        let layout = fork();
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(HUB, LEFT);
        g.ensure_edge_exists(HUB, RIGHT);
        let mut s = stepper(5);
        assert_eq!(s.choose_between(&g, HUB, LEFT, RIGHT), None);
    }

    #[test]
    fn prefers_new_edge_at_configured_rate() {
        let layout = fork();
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(HUB, LEFT);
        let mut s = stepper(2024);
        let trials = 10_000;
        let picked_new = (0..trials)
            .filter(|_| s.choose_between(&g, HUB, LEFT, RIGHT) == Some(RIGHT))
            .count();
        let rate = picked_new as f64 / trials as f64;
        assert!((0.83..=0.87).contains(&rate), "rate {rate}");
    }

    #[test]
    fn both_new_splits_evenly() {
        let layout = fork();
        let g = Graph::from_layout(&layout);
        let mut s = stepper(11);
        let trials = 10_000;
        let left = (0..trials)
            .filter(|_| s.choose_between(&g, HUB, LEFT, RIGHT) == Some(LEFT))
            .count();
        let rate = left as f64 / trials as f64;
        assert!((0.47..=0.53).contains(&rate), "rate {rate}");
    }

    #[test]
    fn probability_clamped_once() {
        assert_eq!(GrowthStepper::new(SimRng::new(0), 1.7).prefer_new_probability(), 1.0);
        assert_eq!(GrowthStepper::new(SimRng::new(0), -0.5).prefer_new_probability(), 0.0);
        assert_eq!(GrowthStepper::new(SimRng::new(0), f64::NAN).prefer_new_probability(), 0.85);
        let cfg = SimConfig { prefer_new_probability: 3.0, ..SimConfig::default() };
        assert_eq!(GrowthStepper::from_config(&cfg).prefer_new_probability(), 1.0);

        let layout = fork();
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(HUB, RIGHT);
        let mut always = GrowthStepper::new(SimRng::new(9), 1.0);
        let mut never = GrowthStepper::new(SimRng::new(9), 0.0);
        for _ in 0..100 {
            assert_eq!(always.choose_between(&g, HUB, LEFT, RIGHT), Some(LEFT));
            assert_eq!(never.choose_between(&g, HUB, LEFT, RIGHT), Some(RIGHT));
        }
    }

    /// Line A–B–C–D–E–G with A–B, B–C, C–D existing and the agent at the dead
    /// end A, facing away from B.
    fn dead_end_setup() -> (Layout, Graph, Agent) {
        let layout = line(&[A, B, C, D, E, G]);
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(A, B);
        g.ensure_edge_exists(B, C);
        g.ensure_edge_exists(C, D);
        (layout, g, Agent::placed(B, A))
    }

    #[test]
    fn blocked_growth_travels_in_same_call() {
        let (layout, mut g, mut agent) = dead_end_setup();
        let outcome = stepper(1).step(&mut agent, &layout, &mut g);
        assert_eq!(outcome, StepOutcome::Travelled { replanned: true });
        assert_eq!(agent.heading(), Some((A, B)));
        let plan = agent.travel_plan().unwrap();
        assert_eq!(plan.target(), D);
        assert_eq!(plan.target_version(), 0);
        assert_eq!(plan.path(), &VecDeque::from([C, D]));
        // Travel counts traffic but never materializes.
        assert_eq!(g.edge_state(A, B).traffic(), 1);
        assert_eq!(g.active_edge_count(), 3);
    }

    #[test]
    fn stale_plan_is_replanned() {
        let (layout, mut g, mut agent) = dead_end_setup();
        let mut s = stepper(1);
        s.step(&mut agent, &layout, &mut g);
        assert_eq!(agent.travel_plan().unwrap().target(), D);

        // Close D behind the agent's back.
        g.ensure_edge_exists(D, E);
        assert!(!g.is_frontier(D));

        let outcome = s.step(&mut agent, &layout, &mut g);
        assert_eq!(outcome, StepOutcome::Travelled { replanned: true });
        let plan = agent.travel_plan().unwrap();
        assert_eq!(plan.target(), E);
        assert_eq!(plan.target_version(), g.vertex_state(E).version());
        assert_eq!(plan.path(), &VecDeque::from([D, E]));
        assert_eq!(agent.curr(), Some(C));
    }

    #[test]
    fn arrival_returns_to_growth() {
        let (layout, mut g, mut agent) = dead_end_setup();
        let mut s = stepper(1);
        assert_eq!(s.step(&mut agent, &layout, &mut g), StepOutcome::Travelled { replanned: true });
        assert_eq!(s.step(&mut agent, &layout, &mut g), StepOutcome::Travelled { replanned: false });
        assert_eq!(agent.mode_kind(), AgentMode::Travel);
        assert_eq!(s.step(&mut agent, &layout, &mut g), StepOutcome::Travelled { replanned: false });
        assert_eq!(agent.heading(), Some((C, D)));
        assert_eq!(agent.mode(), &Mode::Grow);

        assert_eq!(s.step(&mut agent, &layout, &mut g), StepOutcome::Grew { new_edge: true });
        assert_eq!(s.step(&mut agent, &layout, &mut g), StepOutcome::Grew { new_edge: true });
        assert!(g.frontier_is_empty());
        assert_eq!(s.step(&mut agent, &layout, &mut g), StepOutcome::FrontierExhausted);
        assert_eq!(agent.heading(), Some((E, G)));
    }

    #[test]
    fn travelling_on_frontier_resumes_without_moving() {
        let layout = line(&[A, B, C]);
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(A, B);
        let mut agent = Agent::placed(A, B);
        agent.mode = Mode::Travel(None);
        let outcome = stepper(1).step(&mut agent, &layout, &mut g);
        assert_eq!(outcome, StepOutcome::Resumed);
        assert!(!outcome.moved());
        assert_eq!(agent.heading(), Some((A, B)));
        assert_eq!(agent.mode(), &Mode::Grow);
    }

    #[test]
    fn unreachable_frontier_stalls_without_mutation() {
        let layout = layout_of(
            &[(A, (0.0, 0.0)), (B, (50.0, 0.0)), (C, (100.0, 0.0)), (D, (150.0, 0.0))],
            &[(A, B), (C, D)],
        );
        let mut g = Graph::from_layout(&layout);
        g.ensure_edge_exists(A, B);
        let mut agent = Agent::placed(A, B);
        let mut s = stepper(1);
        for _ in 0..3 {
            assert_eq!(s.step(&mut agent, &layout, &mut g), StepOutcome::Stalled);
        }
        assert_eq!(agent.heading(), Some((A, B)));
        assert_eq!(agent.mode(), &Mode::Travel(None));
        assert_eq!(g.edge_state(A, B).traffic(), 0);
        assert_eq!(g.frontier_count(), 2);
    }
}

// ── Whole runs on a honeycomb ─────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use hf_layout::{HexGridConfig, compute_hex_grid_layout};

    use super::*;
    use crate::{Agent, GrowthStepper, StepOutcome};

    const STEP_CAP: usize = 500_000;

    fn honeycomb() -> Layout {
        compute_hex_grid_layout(600, 200, &HexGridConfig::default()).unwrap().layout
    }

    /// Step `agents` round-robin until the frontier empties, recording every
    /// heading and checking the frontier counter after each step.
    fn run(seed: u64, agents: usize) -> Vec<(VertexKey, VertexKey)> {
        let layout = honeycomb();
        let mut g = Graph::from_layout(&layout);
        let mut s = GrowthStepper::new(SimRng::new(seed), 0.85);
        let mut agents: Vec<Agent> = (0..agents).map(|_| Agent::new()).collect();
        let mut trace = Vec::new();

        for _ in 0..STEP_CAP {
            if g.frontier_is_empty() {
                break;
            }
            for agent in &mut agents {
                let outcome = s.step(agent, &layout, &mut g);
                assert_eq!(g.recount_frontier(), g.frontier_count());
                if outcome == StepOutcome::FrontierExhausted {
                    continue;
                }
                let (prev, curr) = agent.heading().unwrap();
                assert!(g.has_edge(prev, curr));
                assert!(g.edge_state(prev, curr).exists());
                trace.push((prev, curr));
            }
        }
        assert!(g.frontier_is_empty(), "run did not finish within {STEP_CAP} steps");
        assert_eq!(g.active_edge_count(), g.edge_count());
        trace
    }

    #[test]
    fn same_seed_same_run() {
        let first = run(42, 1);
        let second = run(42, 1);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(run(1, 1), run(2, 1));
    }

    #[test]
    fn several_agents_share_the_graph() {
        let first = run(7, 3);
        assert_eq!(first, run(7, 3));
    }
}
