//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `HfError` as one variant
//! via `From` where configuration checks are shared.

use thiserror::Error;

/// The top-level error type for `hf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HfError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `hf-*` crates.
pub type HfResult<T> = Result<T, HfError>;
