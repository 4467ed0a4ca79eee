//! `fd-engine`: the stochastic state-transition engine.
//!
//! # Transition order
//!
//! ```text
//! step(state, joint_action, rng) -> Transition { state', events }:
//!   ① Actions   : idle vehicles accept `assign` / `move`; everything else
//!                  is silently ignored.
//!   ② Movement  : every non-idle vehicle steps one cell toward its
//!                  destination (x first), may be delayed by traffic, and
//!                  handles pickup / drop-off / end of repositioning on arrival.
//!   ③ Arrivals  : Poisson-distributed new requests, scaled by time of day.
//!   ④ Aging     : every active request waits one more tick and may cancel.
//!   ⑤ Traffic   : time-of-day baseline + uniform noise, clamped to [0.8, 2.0].
//!   ⑥ Clock     : tick += 1.
//! ```
//!
//! The input state is never mutated: `step` clones it first and applies the
//! rules to the clone.  All randomness comes from the caller's `SimRng`, so a
//! step is reproducible from (state, action, RNG state).
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the per-tick claimed-request index.           |

pub mod demand;
pub mod engine;
pub mod error;
pub mod events;
pub mod traffic;


pub use engine::{Transition, TransitionEngine};
pub use error::{EngineError, EngineResult};
pub use events::{RideCompletion, StepEvents};
