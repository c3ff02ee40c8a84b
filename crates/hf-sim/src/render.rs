//! Render-ready snapshots.
//!
//! Nothing here draws.  These are the values a renderer needs each frame:
//! one stroke per existing edge and one marker per agent.

use hf_core::{AgentMode, PixelPoint};
use hf_graph::Graph;
use hf_layout::Layout;

/// Widest extra stroke, reached at 36 traversals.
pub const MAX_EXTRA_STROKE: f32 = 6.0;

/// `1 + min(6, sqrt(traffic))`.
#[inline]
pub fn stroke_width(traffic: u64) -> f32 {
    1.0 + (traffic as f32).sqrt().min(MAX_EXTRA_STROKE)
}

/// One existing edge in pixel space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeStroke {
    pub from:    PixelPoint,
    pub to:      PixelPoint,
    pub width:   f32,
    pub traffic: u64,
}

/// Strokes for every existing edge, in materialization order.
pub fn edge_strokes(layout: &Layout, graph: &Graph) -> Vec<EdgeStroke> {
    graph
        .active_edges()
        .map(|(key, state)| {
            let (from, to) = layout.edge_endpoints(key);
            EdgeStroke { from, to, width: stroke_width(state.traffic()), traffic: state.traffic() }
        })
        .collect()
}

/// Marker state of one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentDrawable {
    pub position: PixelPoint,
    pub mode:     AgentMode,
}
