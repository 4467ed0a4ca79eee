//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FdError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `fd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FdError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fd-*` crates.
pub type FdResult<T> = Result<T, FdError>;
