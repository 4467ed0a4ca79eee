//! `fd-core`: foundational types for the fleet-dispatch simulator.
//!
//! This crate is a dependency of every other `fd-*` crate.  It intentionally
//! has no `fd-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `RequestId`                              |
//! | [`geo`]         | `Cell`, Manhattan distance, unit steps                |
//! | [`time`]        | `Tick`, `DayPeriod` (time-of-day bands)               |
//! | [`rng`]         | `SimRng`: the one seedable generator threaded everywhere |
//! | [`config`]      | `DispatchConfig` + construction-time validation       |
//! | [`error`]       | `FdError`, `FdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DispatchConfig;
pub use error::{FdError, FdResult};
pub use geo::Cell;
pub use ids::{RequestId, VehicleId};
pub use rng::SimRng;
pub use time::{DayPeriod, TICKS_PER_DAY, TICKS_PER_HOUR, Tick};
