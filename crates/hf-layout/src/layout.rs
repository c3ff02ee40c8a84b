//! Layout representation and builder.
//!
//! # Data layout
//!
//! Vertices keep their insertion order in `vertices`; positions are looked up
//! through an `FxHashMap` keyed by `VertexKey`.  Static edges are stored once
//! each as canonical [`EdgeKey`]s, again in insertion order, so every
//! consumer that derives adjacency from the layout sees the same enumeration
//! order and deterministic tie-breaks survive across runs.

use rustc_hash::{FxHashMap, FxHashSet};

use hf_core::{EdgeKey, PixelPoint, VertexKey};

use crate::{LayoutError, LayoutResult};

// ── Layout ────────────────────────────────────────────────────────────────────

/// Immutable vertex set with pixel positions plus the static undirected edge
/// set over those vertices.
///
/// Do not construct directly; use [`LayoutBuilder`] or
/// [`compute_hex_grid_layout`][crate::compute_hex_grid_layout].
pub struct Layout {
    vertices:  Vec<VertexKey>,
    positions: FxHashMap<VertexKey, PixelPoint>,
    edges:     Vec<EdgeKey>,
}

impl Layout {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertex keys in insertion order.
    #[inline]
    pub fn vertices(&self) -> &[VertexKey] {
        &self.vertices
    }

    /// All static edges (canonical keys) in insertion order.
    #[inline]
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    /// Pixel position of `key`.
    ///
    /// # Panics
    /// Panics if `key` is not part of this layout; callers only ever hold
    /// keys that came from the layout itself.
    #[inline]
    pub fn position(&self, key: VertexKey) -> PixelPoint {
        match self.positions.get(&key) {
            Some(&px) => px,
            None => panic!("vertex {key} is not part of the layout"),
        }
    }

    /// Both endpoint positions of `edge`, in canonical (lo, hi) order.
    pub fn edge_endpoints(&self, edge: EdgeKey) -> (PixelPoint, PixelPoint) {
        (self.position(edge.lo()), self.position(edge.hi()))
    }
}

// ── LayoutBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Layout`] incrementally, then call [`build`](Self::build).
///
/// Vertices and edges may be added in any order; validation happens once in
/// `build()`.  Duplicate undirected edges collapse onto their first
/// occurrence.
///
/// # Example
///
/// ```
/// use hf_core::{PixelPoint, VertexKey};
/// use hf_layout::LayoutBuilder;
///
/// let a = VertexKey::new(0, 0);
/// let b = VertexKey::new(1, 0);
/// let mut builder = LayoutBuilder::new();
/// builder.add_vertex(a, PixelPoint::new(0.0, 0.0));
/// builder.add_vertex(b, PixelPoint::new(10.0, 0.0));
/// builder.add_edge(a, b);
/// builder.add_edge(b, a); // same undirected edge
/// let layout = builder.build().unwrap();
/// assert_eq!(layout.vertex_count(), 2);
/// assert_eq!(layout.edge_count(), 1);
/// ```
pub struct LayoutBuilder {
    nodes:     Vec<(VertexKey, PixelPoint)>,
    raw_edges: Vec<(VertexKey, VertexKey)>,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    pub fn add_vertex(&mut self, key: VertexKey, px: PixelPoint) {
        self.nodes.push((key, px));
    }

    /// Add an undirected edge between `a` and `b`.
    pub fn add_edge(&mut self, a: VertexKey, b: VertexKey) {
        self.raw_edges.push((a, b));
    }

    /// Validate and consume the builder.
    ///
    /// # Errors
    ///
    /// Duplicate vertex keys, non-finite positions, self-loops, and edges
    /// naming a vertex that was never added.
    pub fn build(self) -> LayoutResult<Layout> {
        let mut positions: FxHashMap<VertexKey, PixelPoint> =
            FxHashMap::with_capacity_and_hasher(self.nodes.len(), Default::default());
        let mut vertices = Vec::with_capacity(self.nodes.len());

        for &(key, px) in &self.nodes {
            if !px.is_finite() {
                return Err(LayoutError::NonFinitePosition(key));
            }
            if positions.insert(key, px).is_some() {
                return Err(LayoutError::DuplicateVertex(key));
            }
            vertices.push(key);
        }

        let mut seen: FxHashSet<EdgeKey> = FxHashSet::default();
        let mut edges = Vec::with_capacity(self.raw_edges.len());
        for &(a, b) in &self.raw_edges {
            if a == b {
                return Err(LayoutError::SelfLoop(a));
            }
            for end in [a, b] {
                if !positions.contains_key(&end) {
                    return Err(LayoutError::UnknownEndpoint { a, b, missing: end });
                }
            }
            let key = EdgeKey::new(a, b);
            if seen.insert(key) {
                edges.push(key);
            }
        }

        Ok(Layout { vertices, positions, edges })
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}
