use fd_core::FdError;
use fd_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] FdError),

    /// A planner's internal simulation failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
