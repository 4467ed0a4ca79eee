//! `fd-mcts`: Monte Carlo Tree Search over joint dispatch actions.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`node`]    | `NodeId`, `Node`: state, incoming action, visit statistics   |
//! | [`arena`]   | `SearchTree`: `Vec<Node>` arena addressed by `NodeId`        |
//! | [`legal`]   | candidate joint actions for a state                           |
//! | [`planner`] | `MctsConfig`, `MctsPlanner`, `SearchOutcome`, `SearchStats`   |
//! | [`error`]   | `MctsError`, `MctsResult<T>`                                  |
//!
//! # One iteration
//!
//! ```text
//! select     descend from the root by UCB1 (unvisited child = +∞, ties → first)
//! expand     if the leaf was visited before: one child per legal action,
//!            each holding one sampled successor state
//! rollout    from the unvisited leaf (or the first new child): uniformly
//!            random legal actions for `rollout_depth` ticks, summing rewards
//! backprop   add the rollout total and one visit to every node up to the root
//! ```
//!
//! The planner always searches against the true [`WorldState`] it is given
//! and never mutates it.  The final decision is the root child with the
//! most visits.
//!
//! [`WorldState`]: fd_model::WorldState

pub mod arena;
pub mod error;
pub mod legal;
pub mod node;
pub mod planner;

#[cfg(test)]
mod tests;

pub use arena::SearchTree;
pub use error::{MctsError, MctsResult};
pub use legal::legal_actions;
pub use node::{Node, NodeId};
pub use planner::{MctsConfig, MctsPlanner, SearchOutcome, SearchStats};
