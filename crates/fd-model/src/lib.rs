//! `fd-model`: passive value types of the dispatch world.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`vehicle`]   | `Vehicle`, `VehicleStatus`                                 |
//! | [`request`]   | `Request`                                                  |
//! | [`state`]     | `WorldState`: one immutable-by-convention snapshot        |
//! | [`action`]    | `Action`, `JointAction`                                    |
//!
//! # Value semantics
//!
//! Every type here owns its data outright: a `Vehicle` holds its own copy of
//! the `Request` it serves, and `WorldState::clone` rebuilds every vehicle
//! and request.  Two snapshots therefore never share a mutable field, which
//! is what lets the planner keep thousands of hypothetical states alive at
//! once.

pub mod action;
pub mod request;
pub mod state;
pub mod vehicle;


pub use action::{Action, JointAction};
pub use request::Request;
pub use state::WorldState;
pub use vehicle::{Vehicle, VehicleStatus};
