use fd_core::{Cell, FdResult, SimRng, config::check_probability};
use fd_model::WorldState;

use crate::{ObservedRequest, ObservedVehicle, PartialView};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObservationConfig {
    /// Chance a vehicle is reported one unit step away from where it is.
    pub position_noise_prob: f64,
    /// Chance an active request shows up in the view at all.
    pub detection_prob: f64,
    /// Amplitude of the uniform noise on the traffic estimate.
    pub traffic_noise: f64,
}

impl Default for ObservationConfig {
    fn default() -> Self {
        ObservationConfig {
            position_noise_prob: 0.1,
            detection_prob:      0.9,
            traffic_noise:       0.1,
        }
    }
}

impl ObservationConfig {
    /// Perfect sensing.
    pub fn exact() -> Self {
        ObservationConfig { position_noise_prob: 0.0, detection_prob: 1.0, traffic_noise: 0.0 }
    }

    pub fn validate(&self) -> FdResult<()> {
        check_probability("position_noise_prob", self.position_noise_prob)?;
        check_probability("detection_prob", self.detection_prob)?;
        if !(self.traffic_noise.is_finite() && self.traffic_noise >= 0.0) {
            return Err(fd_core::FdError::Config(format!(
                "traffic_noise must be finite and >= 0, got {}",
                self.traffic_noise
            )));
        }
        Ok(())
    }
}

/// Produces [`PartialView`]s of a world on a `grid_size × grid_size` grid.
#[derive(Debug, Clone)]
pub struct ObservationModel {
    config:    ObservationConfig,
    grid_size: u32,
}

impl ObservationModel {
    pub fn new(config: ObservationConfig, grid_size: u32) -> FdResult<Self> {
        config.validate()?;
        if grid_size == 0 {
            return Err(fd_core::FdError::Config("grid_size must be > 0".into()));
        }
        Ok(ObservationModel { config, grid_size })
    }

    #[inline]
    pub fn config(&self) -> &ObservationConfig {
        &self.config
    }

    /// Sample a view of `state`.  `state` is not modified.
    pub fn observe(&self, state: &WorldState, rng: &mut SimRng) -> PartialView {
        let vehicles = state
            .vehicles
            .iter()
            .map(|v| {
                let mut seen = ObservedVehicle::from(v);
                if rng.gen_bool(self.config.position_noise_prob) {
                    seen.position = self.jitter(v.position, rng);
                }
                seen
            })
            .collect();

        let requests = state
            .requests
            .iter()
            .filter(|_| rng.gen_bool(self.config.detection_prob))
            .map(ObservedRequest::from)
            .collect();

        PartialView {
            tick: state.tick,
            vehicles,
            requests,
            traffic_estimate: state.traffic_level + rng.symmetric(self.config.traffic_noise),
        }
    }

    fn jitter(&self, position: Cell, rng: &mut SimRng) -> Cell {
        match rng.choose(&Cell::UNIT_STEPS) {
            Some(&step) => position.offset_clamped(step, self.grid_size),
            None => position,
        }
    }
}
