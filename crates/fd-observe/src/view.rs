use fd_core::{Cell, RequestId, Tick, VehicleId};
use fd_model::{Request, Vehicle, VehicleStatus, WorldState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservedVehicle {
    pub id:       VehicleId,
    pub position: Cell,
    pub status:   VehicleStatus,
}

impl From<&Vehicle> for ObservedVehicle {
    fn from(v: &Vehicle) -> Self {
        ObservedVehicle { id: v.id, position: v.position, status: v.status }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservedRequest {
    pub id:           RequestId,
    pub origin:       Cell,
    pub destination:  Cell,
    pub waiting_time: u32,
}

impl From<&Request> for ObservedRequest {
    fn from(r: &Request) -> Self {
        ObservedRequest {
            id:           r.id,
            origin:       r.origin,
            destination:  r.destination,
            waiting_time: r.waiting_time,
        }
    }
}

/// A possibly distorted snapshot of the world.
///
/// Vehicles are listed in id order (every vehicle is always present);
/// requests in id order, minus the undetected ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartialView {
    pub tick:             Tick,
    pub vehicles:         Vec<ObservedVehicle>,
    pub requests:         Vec<ObservedRequest>,
    pub traffic_estimate: f64,
}

impl PartialView {
    /// The noiseless view of `state`.
    pub fn exact(state: &WorldState) -> Self {
        PartialView {
            tick:             state.tick,
            vehicles:         state.vehicles.iter().map(ObservedVehicle::from).collect(),
            requests:         state.requests.iter().map(ObservedRequest::from).collect(),
            traffic_estimate: state.traffic_level,
        }
    }

    pub fn idle_vehicles(&self) -> impl Iterator<Item = &ObservedVehicle> + '_ {
        self.vehicles.iter().filter(|v| v.status == VehicleStatus::Idle)
    }
}
