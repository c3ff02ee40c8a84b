//! Layout error type.

use thiserror::Error;

use hf_core::VertexKey;

/// Errors produced while building a [`Layout`][crate::Layout].
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("vertex {0} added more than once")]
    DuplicateVertex(VertexKey),

    #[error("vertex {0} has a non-finite position")]
    NonFinitePosition(VertexKey),

    #[error("edge {a}-{b} references unknown vertex {missing}")]
    UnknownEndpoint {
        a:       VertexKey,
        b:       VertexKey,
        missing: VertexKey,
    },

    #[error("edge {0}-{0} is a self-loop")]
    SelfLoop(VertexKey),

    #[error("no hexagon fits in a {width}x{height} px window")]
    EmptyGrid { width: u32, height: u32 },
}

pub type LayoutResult<T> = Result<T, LayoutError>;
