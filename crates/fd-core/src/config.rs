//! Construction-time configuration of the dispatch world.

use crate::{FdError, FdResult};

/// Top-level world configuration.
///
/// Typically loaded from JSON by the application crate (with the `serde`
/// feature) and handed to the transition engine, which validates it once.
/// Nothing here can change mid-run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Side length of the square grid.  Must be > 0.
    pub grid_size: u32,

    /// Number of vehicles in the fleet.  Must be > 0.
    pub vehicle_count: usize,

    /// Mean new requests per tick before the time-of-day multiplier.
    pub request_rate: f64,

    /// Cancellation probability of a request that has just arrived.
    pub cancellation_prob: f64,

    /// Added to the cancellation probability per tick of waiting.
    pub cancellation_slope: f64,

    /// Ceiling on the per-tick cancellation probability.
    pub max_cancellation_prob: f64,

    /// Per-step delay probability is `traffic_level × traffic_delay_factor`.
    /// Must lie in `[0, 0.5]` so the product stays a probability.
    pub traffic_delay_factor: f64,

    /// Amplitude of the uniform perturbation added to the traffic baseline.
    pub traffic_noise: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            grid_size:             10,
            vehicle_count:         5,
            request_rate:          2.0,
            cancellation_prob:     0.2,
            cancellation_slope:    0.01,
            max_cancellation_prob: 0.5,
            traffic_delay_factor:  0.1,
            traffic_noise:         0.1,
            seed:                  42,
        }
    }
}

impl DispatchConfig {
    /// Lower bound of the traffic level.
    pub const MIN_TRAFFIC: f64 = 0.8;
    /// Upper bound of the traffic level.
    pub const MAX_TRAFFIC: f64 = 2.0;

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> FdResult<()> {
        if self.grid_size == 0 {
            return Err(FdError::Config("grid_size must be > 0".into()));
        }
        if self.grid_size > i32::MAX as u32 {
            return Err(FdError::Config("grid_size does not fit grid coordinates".into()));
        }
        if self.vehicle_count == 0 {
            return Err(FdError::Config("vehicle_count must be > 0".into()));
        }
        if self.vehicle_count > u32::MAX as usize {
            return Err(FdError::Config("vehicle_count exceeds the id space".into()));
        }
        if !(self.request_rate.is_finite() && self.request_rate >= 0.0) {
            return Err(FdError::Config(format!(
                "request_rate must be finite and >= 0, got {}",
                self.request_rate
            )));
        }
        check_probability("cancellation_prob", self.cancellation_prob)?;
        check_probability("max_cancellation_prob", self.max_cancellation_prob)?;
        if !(self.cancellation_slope.is_finite() && self.cancellation_slope >= 0.0) {
            return Err(FdError::Config(format!(
                "cancellation_slope must be finite and >= 0, got {}",
                self.cancellation_slope
            )));
        }
        if !(0.0..=0.5).contains(&self.traffic_delay_factor) {
            return Err(FdError::Config(format!(
                "traffic_delay_factor must lie in [0, 0.5], got {}",
                self.traffic_delay_factor
            )));
        }
        if !(self.traffic_noise.is_finite() && self.traffic_noise >= 0.0) {
            return Err(FdError::Config(format!(
                "traffic_noise must be finite and >= 0, got {}",
                self.traffic_noise
            )));
        }
        Ok(())
    }
}

/// `Ok` if `p` is a probability.  NaN is rejected by the range check.
pub fn check_probability(name: &str, p: f64) -> FdResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(FdError::Config(format!("{name} must lie in [0, 1], got {p}")))
    }
}
