use fd_engine::EngineError;
use fd_policy::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MctsError {
    #[error("invalid config: {msg}")]
    InvalidConfig { msg: String },

    /// A simulated step failed inside the search.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type MctsResult<T> = Result<T, MctsError>;

impl From<MctsError> for PolicyError {
    fn from(e: MctsError) -> Self {
        match e {
            MctsError::InvalidConfig { msg } => PolicyError::Config(msg),
            MctsError::Engine(e) => PolicyError::Engine(e),
        }
    }
}
