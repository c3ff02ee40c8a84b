//! The `Graph`: static adjacency plus mutable simulation state.
//!
//! # Data layout
//!
//! Vertices are addressed by a dense slot (`u32`) assigned in layout order.
//! Adjacency lists, vertex states, and the key → slot map are parallel
//! structures indexed by that slot; edge state lives in an `FxHashMap` keyed
//! by canonical [`EdgeKey`].  Neighbor order is fixed at construction (the
//! order edges were supplied) and is what every deterministic tie-break in
//! the stepper relies on.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use hf_core::{EdgeKey, SimRng, VertexKey};
use hf_layout::Layout;

use crate::{EdgeState, GraphError, GraphResult, VertexState};

/// Topology and mutable state shared by every agent of one run.
///
/// Every key passed to a `Graph` method must have come from the graph's own
/// vertex set.  A foreign key is a construction bug and panics.
pub struct Graph {
    /// Vertex keys in slot order.
    vertices:       Vec<VertexKey>,
    slots:          FxHashMap<VertexKey, u32>,
    /// Static neighbors per slot, in edge-supply order.
    adjacency:      Vec<Vec<VertexKey>>,
    vertex_states:  Vec<VertexState>,
    edge_states:    FxHashMap<EdgeKey, EdgeState>,
    /// Materialized edges in materialization order.
    active_edges:   Vec<EdgeKey>,
    /// Vertices with nonzero degree, in slot order.  Start-edge candidates.
    start_vertices: Vec<VertexKey>,
    frontier_count: usize,
}

impl Graph {
    /// Derive adjacency and fresh state from a validated layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let edges = layout.edges().iter().map(|e| e.endpoints());
        match Self::from_parts(layout.vertices().iter().copied(), edges) {
            Ok(graph) => graph,
            // `LayoutBuilder::build` already rejected every case `from_parts` checks.
            Err(e) => panic!("validated layout produced an invalid graph: {e}"),
        }
    }

    /// Build a graph from raw vertex and undirected edge lists.
    ///
    /// Duplicate undirected edges collapse onto their first occurrence.
    ///
    /// # Errors
    ///
    /// Duplicate vertices, self-loops, and edges naming unknown vertices.
    pub fn from_parts<V, E>(vertices: V, edges: E) -> GraphResult<Self>
    where
        V: IntoIterator<Item = VertexKey>,
        E: IntoIterator<Item = (VertexKey, VertexKey)>,
    {
        let vertices: Vec<VertexKey> = vertices.into_iter().collect();
        let mut slots: FxHashMap<VertexKey, u32> =
            FxHashMap::with_capacity_and_hasher(vertices.len(), Default::default());
        for (i, &key) in vertices.iter().enumerate() {
            if slots.insert(key, i as u32).is_some() {
                return Err(GraphError::DuplicateVertex(key));
            }
        }

        let mut adjacency: Vec<Vec<VertexKey>> = vec![Vec::new(); vertices.len()];
        let mut edge_states: FxHashMap<EdgeKey, EdgeState> = FxHashMap::default();
        let mut seen: FxHashSet<EdgeKey> = FxHashSet::default();

        for (a, b) in edges {
            if a == b {
                return Err(GraphError::SelfLoop(a));
            }
            let (Some(&sa), Some(&sb)) = (slots.get(&a), slots.get(&b)) else {
                let missing = if slots.contains_key(&a) { b } else { a };
                return Err(GraphError::UnknownEndpoint { a, b, missing });
            };
            let key = EdgeKey::new(a, b);
            if !seen.insert(key) {
                continue;
            }
            adjacency[sa as usize].push(b);
            adjacency[sb as usize].push(a);
            edge_states.insert(key, EdgeState::default());
        }

        let vertex_states: Vec<VertexState> = adjacency
            .iter()
            .map(|ns| VertexState::with_degree(ns.len() as u32))
            .collect();

        let start_vertices: Vec<VertexKey> = vertices
            .iter()
            .zip(&adjacency)
            .filter(|(_, ns)| !ns.is_empty())
            .map(|(&key, _)| key)
            .collect();
        let frontier_count = start_vertices.len();

        Ok(Self {
            vertices,
            slots,
            adjacency,
            vertex_states,
            edge_states,
            active_edges: Vec::new(),
            start_vertices,
            frontier_count,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of static edges.
    pub fn edge_count(&self) -> usize {
        self.edge_states.len()
    }

    /// Number of materialized edges.
    pub fn active_edge_count(&self) -> usize {
        self.active_edges.len()
    }

    /// All vertex keys in construction order.
    pub fn vertices(&self) -> &[VertexKey] {
        &self.vertices
    }

    /// `true` if `{a, b}` is a static edge.
    pub fn has_edge(&self, a: VertexKey, b: VertexKey) -> bool {
        self.edge_states.contains_key(&EdgeKey::new(a, b))
    }

    // ── Topology ──────────────────────────────────────────────────────────

    /// Full static adjacency of `v`, in construction order.
    #[inline]
    pub fn neighbors(&self, v: VertexKey) -> &[VertexKey] {
        &self.adjacency[self.slot(v)]
    }

    #[inline]
    pub fn degree(&self, v: VertexKey) -> usize {
        self.neighbors(v).len()
    }

    /// Neighbors of `v` reachable over materialized edges, lazily filtered.
    pub fn existing_neighbors(&self, v: VertexKey) -> impl Iterator<Item = VertexKey> + '_ {
        self.neighbors(v)
            .iter()
            .copied()
            .filter(move |&n| self.edge_states[&EdgeKey::new(v, n)].exists)
    }

    // ── Frontier ──────────────────────────────────────────────────────────

    #[inline]
    pub fn is_frontier(&self, v: VertexKey) -> bool {
        self.vertex_states[self.slot(v)].is_frontier()
    }

    #[inline]
    pub fn frontier_is_empty(&self) -> bool {
        self.frontier_count == 0
    }

    #[inline]
    pub fn frontier_count(&self) -> usize {
        self.frontier_count
    }

    /// Count frontier vertices from per-vertex state, ignoring the running
    /// counter.  O(V); used to check the counter in tests and debug runs.
    pub fn recount_frontier(&self) -> usize {
        self.vertex_states.iter().filter(|s| s.is_frontier()).count()
    }

    // ── State access ──────────────────────────────────────────────────────

    #[inline]
    pub fn vertex_state(&self, v: VertexKey) -> &VertexState {
        &self.vertex_states[self.slot(v)]
    }

    #[inline]
    pub fn edge_state(&self, a: VertexKey, b: VertexKey) -> &EdgeState {
        let key = EdgeKey::new(a, b);
        match self.edge_states.get(&key) {
            Some(state) => state,
            None => panic!("edge {key} is not part of the graph"),
        }
    }

    /// Materialized edges with their state, in materialization order.
    pub fn active_edges(&self) -> impl Iterator<Item = (EdgeKey, &EdgeState)> + '_ {
        self.active_edges.iter().map(|&key| (key, &self.edge_states[&key]))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Materialize the static edge `{a, b}`.
    ///
    /// Idempotent: returns `false` and changes nothing if the edge already
    /// exists.  Otherwise each endpoint loses one open incident edge; an
    /// endpoint whose count reaches zero has its `version` bumped and leaves
    /// the frontier.
    pub fn ensure_edge_exists(&mut self, a: VertexKey, b: VertexKey) -> bool {
        let key = EdgeKey::new(a, b);
        let state = match self.edge_states.get_mut(&key) {
            Some(state) => state,
            None => panic!("edge {key} is not part of the graph"),
        };
        if state.exists {
            return false;
        }
        state.exists = true;
        self.active_edges.push(key);

        for end in [key.lo(), key.hi()] {
            let slot = self.slot(end);
            let vs = &mut self.vertex_states[slot];
            if vs.open_incident_edges == 0 {
                continue;
            }
            vs.open_incident_edges -= 1;
            if vs.open_incident_edges == 0 {
                vs.version += 1;
                self.frontier_count -= 1;
                trace!(vertex = %end, frontier = self.frontier_count, "vertex closed");
            }
        }
        trace!(edge = %key, active = self.active_edges.len(), "edge materialized");
        true
    }

    /// Count one traversal from `from` to `to`: bumps the edge's traffic and
    /// the destination's visit count.  Does not materialize the edge.
    pub fn record_traversal(&mut self, from: VertexKey, to: VertexKey) {
        let key = EdgeKey::new(from, to);
        match self.edge_states.get_mut(&key) {
            Some(state) => state.traffic += 1,
            None => panic!("edge {key} is not part of the graph"),
        }
        let slot = self.slot(to);
        self.vertex_states[slot].visit_count += 1;
    }

    /// Pick a directed start edge `(neighbor, vertex)`: a uniformly chosen
    /// vertex of nonzero degree, then one of its neighbors uniformly.
    ///
    /// Returns `None` only when no vertex has an incident edge.
    pub fn choose_random_start_edge(&self, rng: &mut SimRng) -> Option<(VertexKey, VertexKey)> {
        let &vertex = rng.choose(&self.start_vertices)?;
        let &neighbor = rng.choose(self.neighbors(vertex))?;
        Some((neighbor, vertex))
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[inline]
    fn slot(&self, v: VertexKey) -> usize {
        match self.slots.get(&v) {
            Some(&slot) => slot as usize,
            None => panic!("vertex {v} is not part of the graph"),
        }
    }
}
