use fd_engine::EngineError;
use fd_policy::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("initial state has {got} vehicles, config expects {expected}")]
    VehicleCountMismatch { expected: usize, got: usize },

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),
}

pub type SimResult<T> = Result<T, SimError>;
