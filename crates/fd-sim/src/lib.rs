//! `fd-sim`: runs dispatch episodes.
//!
//! # Episode loop
//!
//! ```text
//! for tick in 0..horizon:
//!   ① observer.on_tick_start(tick, state)
//!   ② action  = policy.select_action(state, policy_rng)
//!   ③ state'  = engine.step(state, action, env_rng)
//!   ④ reward  = score(events, weights); history.record(..)
//!   ⑤ observer.on_tick_end(report)
//! observer.on_episode_end(state, summary)
//! ```
//!
//! The policy and the environment draw from two separate `SimRng` streams
//! derived from the episode seed, so a policy consuming more or fewer random
//! numbers does not shift the environment's draws for the same decision.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Experiment episodes run on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fd_core::DispatchConfig;
//! use fd_policy::GreedyPolicy;
//! use fd_sim::{NoopObserver, SimBuilder};
//!
//! let config = DispatchConfig::default();
//! let policy = GreedyPolicy::plain(config.grid_size)?;
//! let mut sim = SimBuilder::new(config, policy).seed(7).horizon(50).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("reward {:.1}", summary.total_reward);
//! ```

pub mod builder;
pub mod error;
pub mod experiment;
pub mod history;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use experiment::{ExperimentReport, episode_seed, run_experiment};
pub use history::{EpisodeHistory, EpisodeSummary, RequestRecord};
pub use observer::{NoopObserver, SimObserver, TickReport};
pub use sim::Sim;
