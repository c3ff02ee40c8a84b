use thiserror::Error;

use hf_core::VertexKey;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0} listed more than once")]
    DuplicateVertex(VertexKey),

    #[error("edge {a}-{b} references unknown vertex {missing}")]
    UnknownEndpoint {
        a:       VertexKey,
        b:       VertexKey,
        missing: VertexKey,
    },

    #[error("edge {0}-{0} is a self-loop")]
    SelfLoop(VertexKey),
}

pub type GraphResult<T> = Result<T, GraphError>;
