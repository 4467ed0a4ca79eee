//! `fd-policy`: dispatch policies and the reward evaluator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`policy`] | `Policy` trait: `select_action(state, rng) -> JointAction`     |
//! | [`reward`] | `RewardWeights`, `score(events, weights)`                      |
//! | [`idle`]   | `IdlePolicy`: never dispatches anything                       |
//! | [`greedy`] | `GreedyPolicy`: longest-waiting request to nearest idle vehicle |
//! | [`error`]  | `PolicyError`, `PolicyResult<T>`                               |
//!
//! # Design notes
//!
//! Policies only read the world.  They return a [`JointAction`] and the
//! simulator feeds it to the transition engine, so a policy can never put
//! the authoritative state into an inconsistent shape.  Any randomness a
//! policy needs comes from the `SimRng` passed in, which keeps episodes
//! reproducible.  Policies are `Send + Sync` so one instance can serve many
//! episodes running in parallel.
//!
//! [`JointAction`]: fd_model::JointAction

pub mod error;
pub mod greedy;
pub mod idle;
pub mod policy;
pub mod reward;


pub use error::{PolicyError, PolicyResult};
pub use greedy::{GreedyConfig, GreedyPolicy};
pub use idle::IdlePolicy;
pub use policy::Policy;
pub use reward::{RewardWeights, score};
