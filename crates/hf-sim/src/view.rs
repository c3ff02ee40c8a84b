//! Read-only view of a simulation between frames.

use hf_core::AgentId;
use hf_graph::Graph;
use hf_grow::Agent;
use hf_layout::Layout;

use crate::controller::AgentRuntime;
use crate::render::{AgentDrawable, EdgeStroke, edge_strokes};
use crate::Animator;

/// Borrowed snapshot handed to observers.
#[derive(Clone, Copy)]
pub struct SimView<'a> {
    pub layout: &'a Layout,
    pub graph:  &'a Graph,
    runtimes:   &'a [AgentRuntime],
}

impl<'a> SimView<'a> {
    pub(crate) fn new(layout: &'a Layout, graph: &'a Graph, runtimes: &'a [AgentRuntime]) -> Self {
        Self { layout, graph, runtimes }
    }

    pub fn agent_count(&self) -> usize {
        self.runtimes.len()
    }

    /// Agents in registration order.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, &'a Agent, &'a Animator)> + 'a {
        self.runtimes
            .iter()
            .enumerate()
            .map(|(i, rt)| (AgentId(i as u32), &rt.agent, &rt.animator))
    }

    pub fn drawables(&self) -> Vec<AgentDrawable> {
        self.runtimes.iter().map(AgentRuntime::drawable).collect()
    }

    pub fn edge_strokes(&self) -> Vec<EdgeStroke> {
        edge_strokes(self.layout, self.graph)
    }
}
