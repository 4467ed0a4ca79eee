//! Fluent builder for constructing a [`Sim`].

use fd_core::{DispatchConfig, SimRng};
use fd_engine::TransitionEngine;
use fd_model::WorldState;
use fd_policy::{Policy, RewardWeights};

use crate::{EpisodeHistory, Sim, SimError, SimResult};

/// Ticks per episode unless [`SimBuilder::horizon`] says otherwise.
pub const DEFAULT_HORIZON: u64 = 50;

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`DispatchConfig`]: grid, fleet size, demand and cancellation rates
/// - `P: Policy`: the dispatcher under test
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                        |
/// |-----------------------|------------------------------------------------|
/// | `.seed(s)`            | `config.seed`                                  |
/// | `.weights(w)`         | `RewardWeights::default()`                     |
/// | `.initial_state(s)`   | `TransitionEngine::initial_state` from the seed |
/// | `.horizon(n)`         | [`DEFAULT_HORIZON`]                            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, GreedyPolicy::plain(10)?)
///     .seed(3)
///     .horizon(288)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: Policy> {
    config:        DispatchConfig,
    policy:        P,
    seed:          Option<u64>,
    weights:       Option<RewardWeights>,
    initial_state: Option<WorldState>,
    horizon:       u64,
}

impl<P: Policy> SimBuilder<P> {
    pub fn new(config: DispatchConfig, policy: P) -> Self {
        Self {
            config,
            policy,
            seed:          None,
            weights:       None,
            initial_state: None,
            horizon:       DEFAULT_HORIZON,
        }
    }

    /// Episode seed; overrides `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn weights(mut self, weights: RewardWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Start from `state` instead of a random idle fleet.
    ///
    /// Must have exactly `config.vehicle_count` vehicles, all on the grid.
    pub fn initial_state(mut self, state: WorldState) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Ticks run by [`Sim::run`].
    pub fn horizon(mut self, ticks: u64) -> Self {
        self.horizon = ticks;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let engine = TransitionEngine::new(self.config)?;
        let weights = self.weights.unwrap_or_default();
        weights.validate()?;

        let seed = self.seed.unwrap_or(engine.config().seed);
        let mut env_rng = SimRng::for_stream(seed, 0);
        let policy_rng = SimRng::for_stream(seed, 1);

        let state = match self.initial_state {
            Some(s) => {
                let expected = engine.config().vehicle_count;
                if s.vehicle_count() != expected {
                    return Err(SimError::VehicleCountMismatch { expected, got: s.vehicle_count() });
                }
                let grid = engine.grid_size();
                if let Some(v) = s.vehicles.iter().find(|v| !v.position.in_grid(grid)) {
                    return Err(SimError::Config(format!(
                        "{} starts at {}, outside the {grid}x{grid} grid",
                        v.id, v.position
                    )));
                }
                if !s.is_consistent() {
                    return Err(SimError::Config("initial state violates a vehicle invariant".into()));
                }
                if let Some(r) = s.known_requests().find(|r| r.arrival_tick > s.tick) {
                    return Err(SimError::Config(format!(
                        "{} arrives at tick {}, after the initial tick {}",
                        r.id, r.arrival_tick.0, s.tick.0
                    )));
                }
                if let Some(r) = s.known_requests().find(|r| r.id >= s.next_request_id) {
                    return Err(SimError::Config(format!(
                        "{} is not below the next request id {}",
                        r.id, s.next_request_id
                    )));
                }
                s
            }
            None => engine.initial_state(&mut env_rng),
        };

        let history = EpisodeHistory::new(state.vehicle_count(), weights.profit_per_ride);
        Ok(Sim {
            engine,
            policy: self.policy,
            weights,
            horizon: self.horizon,
            state,
            env_rng,
            policy_rng,
            history,
        })
    }
}
