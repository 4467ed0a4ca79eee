//! Per-vehicle state.

use fd_core::{Cell, VehicleId};

use crate::Request;

/// What a vehicle is doing right now.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleStatus {
    /// Parked, free to take an `assign` or `move` action.
    #[default]
    Idle,
    /// Driving empty toward its assigned request's origin.
    EnRouteToPickup,
    /// Carrying its assigned request toward the request's destination.
    Occupied,
    /// Driving empty toward a cell chosen by a `move` action.
    Repositioning,
}

impl VehicleStatus {
    /// `true` for every status except [`VehicleStatus::Idle`].
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, VehicleStatus::Idle)
    }

    /// Label used in CSV output and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Idle            => "idle",
            VehicleStatus::EnRouteToPickup => "en_route_to_pickup",
            VehicleStatus::Occupied        => "occupied",
            VehicleStatus::Repositioning   => "repositioning",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vehicle of the fleet.
///
/// Invariant: `status == Idle` exactly when `assigned_request`, `destination`
/// are `None` and `remaining_travel_time == 0`.  The constructors and
/// transition helpers below are the only ways the engine changes status, and
/// each of them keeps the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:                    VehicleId,
    pub position:              Cell,
    pub status:                VehicleStatus,
    /// Owned copy of the request taken at assignment time.
    pub assigned_request:      Option<Request>,
    pub destination:           Option<Cell>,
    pub remaining_travel_time: u32,
}

impl Vehicle {
    /// An idle vehicle parked at `position`.
    pub fn idle(id: VehicleId, position: Cell) -> Self {
        Self {
            id,
            position,
            status:                VehicleStatus::Idle,
            assigned_request:      None,
            destination:           None,
            remaining_travel_time: 0,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.status == VehicleStatus::Idle
    }

    /// Does the vehicle satisfy the idle ⇔ unassigned invariant?
    pub fn is_consistent(&self) -> bool {
        let unassigned = self.assigned_request.is_none()
            && self.destination.is_none()
            && self.remaining_travel_time == 0;
        match self.status {
            VehicleStatus::Idle            => unassigned,
            VehicleStatus::Repositioning   => self.assigned_request.is_none() && self.destination.is_some(),
            VehicleStatus::EnRouteToPickup
            | VehicleStatus::Occupied      => self.assigned_request.is_some() && self.destination.is_some(),
        }
    }

    /// Start driving to `request`'s origin.
    pub fn begin_pickup(&mut self, request: Request) {
        let origin = request.origin;
        self.status = VehicleStatus::EnRouteToPickup;
        self.destination = Some(origin);
        self.remaining_travel_time = self.position.manhattan(origin);
        self.assigned_request = Some(request);
    }

    /// Start driving empty to `target`.
    pub fn begin_reposition(&mut self, target: Cell) {
        self.status = VehicleStatus::Repositioning;
        self.destination = Some(target);
        self.remaining_travel_time = self.position.manhattan(target);
    }

    /// Snap to the request's origin and start the ride.
    ///
    /// Returns the id of the request picked up, or `None` if the vehicle was
    /// not en route to a pickup.
    pub fn pick_up(&mut self) -> Option<fd_core::RequestId> {
        if self.status != VehicleStatus::EnRouteToPickup {
            return None;
        }
        let request = self.assigned_request.as_ref()?;
        let (id, origin, destination, length) =
            (request.id, request.origin, request.destination, request.trip_length());
        self.position = origin;
        self.status = VehicleStatus::Occupied;
        self.destination = Some(destination);
        self.remaining_travel_time = length;
        Some(id)
    }

    /// Snap to the destination (if any) and become idle.
    ///
    /// Returns the request that was on board, if one was.
    pub fn arrive(&mut self) -> Option<Request> {
        if let Some(dest) = self.destination {
            self.position = dest;
        }
        self.release()
    }

    /// Become idle where the vehicle stands, dropping any assignment.
    pub fn release(&mut self) -> Option<Request> {
        self.status = VehicleStatus::Idle;
        self.destination = None;
        self.remaining_travel_time = 0;
        self.assigned_request.take()
    }

    /// Id of the request this vehicle is assigned to, if any.
    #[inline]
    pub fn request_id(&self) -> Option<fd_core::RequestId> {
        self.assigned_request.as_ref().map(|r| r.id)
    }
}
