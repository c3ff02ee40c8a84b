//! `hf-graph`: topology and mutable simulation state.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`state`] | `VertexState`, `EdgeState`                                 |
//! | [`graph`] | `Graph`: adjacency, state tables and frontier bookkeeping  |
//! | [`error`] | `GraphError`, `GraphResult<T>`                             |
//!
//! # Frontier model
//!
//! A vertex is on the frontier while at least one of its static edges has
//! not been materialized.  `Graph` keeps a running `frontier_count` next to
//! the per-vertex counters; [`Graph::ensure_edge_exists`] is the only
//! mutation that touches either.
//!
//! The graph is owned once per run and mutated by one writer at a time.
//! Agents hold vertex keys only, never references into graph internals.

pub mod error;
pub mod graph;
pub mod state;


pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use state::{EdgeState, VertexState};
