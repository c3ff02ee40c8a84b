//! Nearest-frontier planning over the existing-edge subgraph.
//!
//! The stepper calls planning through the [`FrontierPlanner`] trait.  The
//! default [`BfsPlanner`] is a plain breadth-first search: the route it finds
//! is shortest by edge count, and ties between equally near frontier
//! vertices resolve by the graph's fixed neighbor order.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use hf_core::VertexKey;
use hf_graph::Graph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// Result of a planning query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// The frontier vertex to head for.
    pub target: VertexKey,
    /// Vertices to step through, excluding the start and including `target`.
    /// Empty when the start itself is on the frontier.
    pub path:   VecDeque<VertexKey>,
}

impl Route {
    /// `true` if the start is already the target.
    pub fn is_trivial(&self) -> bool {
        self.path.is_empty()
    }
}

// ── FrontierPlanner trait ─────────────────────────────────────────────────────

/// Pluggable nearest-frontier search.
pub trait FrontierPlanner {
    /// Find a frontier vertex reachable from `start` over existing edges.
    ///
    /// Returns `None` when no frontier vertex is reachable.  This is a normal
    /// outcome; the caller retries on a later step.
    fn plan(&self, graph: &Graph, start: VertexKey) -> Option<Route>;
}

// ── BfsPlanner ────────────────────────────────────────────────────────────────

/// FIFO breadth-first search over `Graph::existing_neighbors`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPlanner;

impl FrontierPlanner for BfsPlanner {
    fn plan(&self, graph: &Graph, start: VertexKey) -> Option<Route> {
        if graph.is_frontier(start) {
            return Some(Route { target: start, path: VecDeque::new() });
        }

        let mut visited: FxHashSet<VertexKey> = FxHashSet::default();
        let mut parent: FxHashMap<VertexKey, VertexKey> = FxHashMap::default();
        let mut queue: VecDeque<VertexKey> = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            for neighbor in graph.existing_neighbors(vertex) {
                if !visited.insert(neighbor) {
                    continue;
                }
                parent.insert(neighbor, vertex);
                if graph.is_frontier(neighbor) {
                    return Some(Route { target: neighbor, path: reconstruct(&parent, start, neighbor) });
                }
                queue.push_back(neighbor);
            }
        }
        None
    }
}

/// Walk parent pointers back from `target`; result excludes `start`.
fn reconstruct(
    parent: &FxHashMap<VertexKey, VertexKey>,
    start:  VertexKey,
    target: VertexKey,
) -> VecDeque<VertexKey> {
    let mut path = VecDeque::new();
    let mut cursor = target;
    while cursor != start {
        path.push_front(cursor);
        cursor = parent[&cursor];
    }
    path
}
