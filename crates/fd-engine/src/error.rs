use fd_core::{FdError, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A joint action named a vehicle the fleet does not have.  This is a
    /// caller bug and is never retried.
    #[error("joint action names {vehicle}, but the fleet has {count} vehicles")]
    UnknownVehicle { vehicle: VehicleId, count: usize },

    #[error(transparent)]
    Config(#[from] FdError),
}

pub type EngineResult<T> = Result<T, EngineError>;
