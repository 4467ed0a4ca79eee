//! Plain data row types written by output backends.

use fd_model::{Vehicle, VehicleStatus};
use fd_sim::TickReport;

/// One vehicle's position and status at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleSnapshotRow {
    pub vehicle_id: u32,
    pub tick:       u64,
    pub x:          i32,
    pub y:          i32,
    pub status:     VehicleStatus,
}

impl VehicleSnapshotRow {
    pub fn of(vehicle: &Vehicle, tick: u64) -> Self {
        VehicleSnapshotRow {
            vehicle_id: vehicle.id.index() as u32,
            tick,
            x:          vehicle.position.x,
            y:          vehicle.position.y,
            status:     vehicle.status,
        }
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub reward:          f64,
    pub completed:       u64,
    pub picked_up:       u64,
    pub cancelled:       u64,
    pub moving:          u64,
    pub idle:            u64,
    pub active_requests: u64,
    pub traffic_level:   f64,
}

impl From<&TickReport<'_>> for TickSummaryRow {
    fn from(r: &TickReport<'_>) -> Self {
        TickSummaryRow {
            tick:            r.tick.0,
            reward:          r.reward,
            completed:       r.events.completed_rides.len() as u64,
            picked_up:       r.events.picked_up_requests.len() as u64,
            cancelled:       r.events.cancelled_requests.len() as u64,
            moving:          r.events.moving_vehicles.len() as u64,
            idle:            r.events.idle_vehicles.len() as u64,
            active_requests: r.events.waiting_requests as u64,
            traffic_level:   r.state.traffic_level,
        }
    }
}
