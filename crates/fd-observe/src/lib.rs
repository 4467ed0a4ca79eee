//! `fd-observe`: what a sensing dispatcher would see.
//!
//! [`ObservationModel::observe`] turns the authoritative [`WorldState`] into
//! a [`PartialView`]:
//!
//! | Element  | Distortion                                                      |
//! |----------|-----------------------------------------------------------------|
//! | vehicle  | with `position_noise_prob`, position off by one unit step (clamped) |
//! | vehicle  | status always truthful                                          |
//! | request  | kept with `detection_prob`, otherwise missing from the view      |
//! | traffic  | `traffic + U(-traffic_noise, traffic_noise)`                    |
//!
//! The state itself is only read.  Planners that need ground truth (MCTS)
//! never go through this crate.
//!
//! [`WorldState`]: fd_model::WorldState

pub mod model;
pub mod view;


pub use model::{ObservationConfig, ObservationModel};
pub use view::{ObservedRequest, ObservedVehicle, PartialView};
