//! The `Sim` struct and its episode loop.

use fd_core::SimRng;
use fd_engine::{Transition, TransitionEngine};
use fd_model::WorldState;
use fd_policy::{Policy, RewardWeights, score};
use tracing::info;

use crate::{EpisodeHistory, EpisodeSummary, SimObserver, SimResult, TickReport};

/// One episode of a policy against the stochastic environment.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Policy> {
    /// The generative model; also the authoritative one here.
    pub engine: TransitionEngine,

    pub policy: P,

    pub weights: RewardWeights,

    /// Ticks run by [`run`](Self::run).
    pub horizon: u64,

    /// The authoritative world state.
    pub state: WorldState,

    /// Drives arrivals, cancellations, delays and traffic.
    pub env_rng: SimRng,

    /// Handed to the policy on every decision.
    pub policy_rng: SimRng,

    pub history: EpisodeHistory,
}

impl<P: Policy> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `horizon` ticks and finish the episode.
    ///
    /// Calls observer hooks at every tick boundary and
    /// [`on_episode_end`][SimObserver::on_episode_end] once at the end.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<EpisodeSummary> {
        self.run_ticks(self.horizon, observer)?;
        let summary = self.history.summary();
        info!(
            policy = self.policy.name(),
            ticks = summary.ticks,
            completed = summary.completed_rides,
            cancelled = summary.cancelled_requests,
            avg_wait = summary.average_wait,
            reward = summary.total_reward,
            "episode finished"
        );
        observer.on_episode_end(&self.state, &summary);
        Ok(summary)
    }

    /// Run exactly `n` ticks from the current state.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    pub fn summary(&self) -> EpisodeSummary {
        self.history.summary()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<f64> {
        let now = self.state.tick;
        observer.on_tick_start(now, &self.state);

        let action = self.policy.select_action(&self.state, &mut self.policy_rng)?;
        let Transition { state, events } = self.engine.step(&self.state, &action, &mut self.env_rng)?;
        let reward = score(&events, &self.weights);

        self.history.record(&self.state, &state, &events, reward);
        self.state = state;

        observer.on_tick_end(&TickReport {
            tick:   now,
            action: &action,
            events: &events,
            reward,
            state:  &self.state,
        });
        Ok(reward)
    }
}
