//! Request arrivals.
//!
//! The number of new requests per tick is Poisson with mean
//! `request_rate × demand_multiplier(period)`.  Each request gets a uniform
//! origin and a uniform destination, redrawn until it differs from the
//! origin.

use fd_core::{Cell, SimRng, Tick};
use rand_distr::{Distribution, Poisson};

/// Poisson mean for arrivals during `tick`.
pub fn arrival_mean(request_rate: f64, tick: Tick) -> f64 {
    request_rate * tick.period().demand_multiplier()
}

/// Draw the number of arrivals for one tick.
///
/// A non-positive mean yields zero arrivals without touching the RNG.
pub fn sample_arrivals(mean: f64, rng: &mut SimRng) -> u64 {
    if !(mean > 0.0) {
        return 0;
    }
    match Poisson::new(mean) {
        Ok(dist) => dist.sample(rng.inner()) as u64,
        Err(_) => 0,
    }
}

/// A uniformly random cell of a `grid_size × grid_size` grid.
pub fn random_cell(grid_size: u32, rng: &mut SimRng) -> Cell {
    let n = grid_size as i32;
    Cell::new(rng.gen_range(0..n), rng.gen_range(0..n))
}

/// A random (origin, destination) pair with `origin != destination`.
///
/// Returns `None` on a 1×1 grid, where no such pair exists.
pub fn random_trip(grid_size: u32, rng: &mut SimRng) -> Option<(Cell, Cell)> {
    if grid_size < 2 {
        return None;
    }
    let origin = random_cell(grid_size, rng);
    let mut destination = random_cell(grid_size, rng);
    while destination == origin {
        destination = random_cell(grid_size, rng);
    }
    Some((origin, destination))
}
