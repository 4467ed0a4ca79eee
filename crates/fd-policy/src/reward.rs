//! Reward evaluator: one scalar per simulated tick.

use fd_engine::StepEvents;

use crate::{PolicyError, PolicyResult};

/// Per-unit reward weights.
///
/// ```text
/// score = profit_per_ride × completed
///       − wait_cost       × aggregate waiting time
///       − cancel_penalty  × cancelled
///       − travel_cost     × moving vehicles
///       − idle_penalty    × idle vehicles
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardWeights {
    pub profit_per_ride: f64,
    pub wait_cost:       f64,
    pub cancel_penalty:  f64,
    pub travel_cost:     f64,
    pub idle_penalty:    f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        RewardWeights {
            profit_per_ride: 10.0,
            wait_cost:       2.0,
            cancel_penalty:  5.0,
            travel_cost:     0.1,
            idle_penalty:    0.02,
        }
    }
}

impl RewardWeights {
    pub fn validate(&self) -> PolicyResult<()> {
        let all = [
            ("profit_per_ride", self.profit_per_ride),
            ("wait_cost", self.wait_cost),
            ("cancel_penalty", self.cancel_penalty),
            ("travel_cost", self.travel_cost),
            ("idle_penalty", self.idle_penalty),
        ];
        for (name, w) in all {
            if !w.is_finite() {
                return Err(PolicyError::Config(format!("reward weight {name} must be finite, got {w}")));
            }
        }
        Ok(())
    }
}

/// Score one tick's events.
pub fn score(events: &StepEvents, weights: &RewardWeights) -> f64 {
    weights.profit_per_ride * events.completed_rides.len() as f64
        - weights.wait_cost * events.total_waiting_time as f64
        - weights.cancel_penalty * events.cancelled_requests.len() as f64
        - weights.travel_cost * events.moving_vehicles.len() as f64
        - weights.idle_penalty * events.idle_vehicles.len() as f64
}
