//! Top-level error aggregating every subsystem error.

use super::{
    ConfigError, DataError, EdgeError, InitError, ParameterError, RetrievalError, ReversalError,
};

/// Any error raised by the simulator.
/// Subsystem errors convert in via `From`, so `?` works across layers.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("parameter error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("init error: {0}")]
    Init(#[from] InitError),

    #[error("edge error: {0}")]
    Edge(#[from] EdgeError),

    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("reversal error: {0}")]
    Reversal(#[from] ReversalError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type SimResult<T> = Result<T, SimError>;
