use hf_core::HfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] HfError),

    #[error("cannot register {0} agents")]
    TooManyAgents(usize),
}

pub type SimResult<T> = Result<T, SimError>;
