//! Traffic level evolution.

use fd_core::{DispatchConfig, SimRng, Tick};

/// Next traffic level: the baseline for `tick`'s period plus uniform noise
/// of amplitude `noise`, clamped to
/// [`MIN_TRAFFIC`](DispatchConfig::MIN_TRAFFIC)..=[`MAX_TRAFFIC`](DispatchConfig::MAX_TRAFFIC).
///
/// The previous level plays no part; traffic has no memory.
pub fn next_level(tick: Tick, noise: f64, rng: &mut SimRng) -> f64 {
    let baseline = tick.period().traffic_baseline();
    clamp_level(baseline + rng.symmetric(noise))
}

#[inline]
pub fn clamp_level(level: f64) -> f64 {
    level.clamp(DispatchConfig::MIN_TRAFFIC, DispatchConfig::MAX_TRAFFIC)
}

/// Per-tick probability that a moving vehicle loses a unit of progress.
#[inline]
pub fn delay_probability(traffic_level: f64, delay_factor: f64) -> f64 {
    (traffic_level * delay_factor).clamp(0.0, 1.0)
}
