//! Per-vertex and per-edge simulation state.

/// Mutable state of one vertex.
///
/// Fields are read through accessors; only [`Graph`][crate::Graph] mutates
/// them so that `version` and the frontier counters stay consistent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexState {
    pub(crate) visit_count:         u64,
    pub(crate) version:             u64,
    pub(crate) open_incident_edges: u32,
}

impl VertexState {
    /// A fresh vertex with `degree` unmaterialized incident edges.
    pub(crate) fn with_degree(degree: u32) -> Self {
        Self { visit_count: 0, version: 0, open_incident_edges: degree }
    }

    /// How many times an agent has arrived at this vertex.
    #[inline]
    pub fn visit_count(&self) -> u64 {
        self.visit_count
    }

    /// Bumped exactly once, when the last incident edge materializes.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Incident static edges that do not exist yet.
    #[inline]
    pub fn open_incident_edges(&self) -> u32 {
        self.open_incident_edges
    }

    #[inline]
    pub fn is_frontier(&self) -> bool {
        self.open_incident_edges > 0
    }
}

/// Mutable state of one undirected static edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeState {
    pub(crate) exists:  bool,
    pub(crate) traffic: u64,
}

impl EdgeState {
    /// `true` once the edge has been materialized.  Never reverts.
    #[inline]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Number of traversals in either direction.
    #[inline]
    pub fn traffic(&self) -> u64 {
        self.traffic
    }
}
