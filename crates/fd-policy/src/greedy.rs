//! Greedy nearest-vehicle dispatch.

use fd_core::{Cell, SimRng};
use fd_model::{Action, JointAction, WorldState};
use fd_observe::{ObservationConfig, ObservationModel, ObservedVehicle, PartialView};
use tracing::trace;

use crate::{Policy, PolicyResult};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GreedyConfig {
    /// Send every idle vehicle left over after dispatch one random unit step.
    pub reposition_idle: bool,
    /// Plan on a noisy [`PartialView`] instead of the true state.
    pub sensing: Option<ObservationConfig>,
}

/// Serves the longest-waiting requests first, each with the nearest idle
/// vehicle.
///
/// Requests are taken in descending waiting time (ties by ascending id).
/// Each goes to the idle vehicle with the smallest Manhattan distance to its
/// origin (ties by ascending vehicle id), and that vehicle is then used up.
/// Requests already claimed by a vehicle are skipped.
#[derive(Debug, Clone)]
pub struct GreedyPolicy {
    config:    GreedyConfig,
    grid_size: u32,
    sensor:    Option<ObservationModel>,
}

impl GreedyPolicy {
    pub fn new(config: GreedyConfig, grid_size: u32) -> PolicyResult<Self> {
        let sensor = match &config.sensing {
            Some(obs) => Some(ObservationModel::new(obs.clone(), grid_size)?),
            None => None,
        };
        Ok(GreedyPolicy { config, grid_size, sensor })
    }

    /// Plain nearest-vehicle dispatch on the true state.
    pub fn plain(grid_size: u32) -> PolicyResult<Self> {
        Self::new(GreedyConfig::default(), grid_size)
    }

    /// Dispatch from an already-built view.
    ///
    /// `state` is only consulted for which requests are already claimed;
    /// the dispatcher knows its own past assignments exactly.
    pub fn plan(&self, view: &PartialView, state: &WorldState, rng: &mut SimRng) -> JointAction {
        let mut requests: Vec<_> = view.requests.iter().filter(|r| !state.is_claimed(r.id)).collect();
        // Stable sort keeps ascending id among equal waiting times.
        requests.sort_by(|a, b| b.waiting_time.cmp(&a.waiting_time));

        let mut free: Vec<ObservedVehicle> = view.idle_vehicles().copied().collect();
        let mut joint = JointAction::all_idle();

        for request in requests {
            let nearest = free
                .iter()
                .enumerate()
                .min_by_key(|(_, v)| (v.position.manhattan(request.origin), v.id))
                .map(|(i, _)| i);
            let Some(i) = nearest else { break };
            let vehicle = free.remove(i);
            trace!(vid = %vehicle.id, rid = %request.id, "greedy assign");
            joint.set(vehicle.id, Action::Assign(request.id));
        }

        if self.config.reposition_idle {
            for vehicle in free {
                if let Some(&step) = rng.choose(&Cell::UNIT_STEPS) {
                    let target = vehicle.position.offset_clamped(step, self.grid_size);
                    joint.set(vehicle.id, Action::Move(target));
                }
            }
        }
        joint
    }
}

impl Policy for GreedyPolicy {
    fn name(&self) -> &str {
        match (self.sensor.is_some(), self.config.reposition_idle) {
            (false, false) => "greedy",
            (false, true)  => "greedy-walk",
            (true, false)  => "greedy-sensing",
            (true, true)   => "greedy-sensing-walk",
        }
    }

    fn select_action(&self, state: &WorldState, rng: &mut SimRng) -> PolicyResult<JointAction> {
        let view = match &self.sensor {
            Some(sensor) => sensor.observe(state, rng),
            None => PartialView::exact(state),
        };
        Ok(self.plan(&view, state, rng))
    }
}
