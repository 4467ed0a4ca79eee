//! The world snapshot the engine transforms and the planner searches over.

use fd_core::{RequestId, Tick, VehicleId};

use crate::{Request, Vehicle};

/// A complete snapshot of the dispatch world at one tick.
///
/// `WorldState` owns every vehicle and request it refers to, so `clone()` is
/// a deep, structurally independent copy.  The transition engine never
/// mutates a state it is given; it clones and returns a new one.
///
/// # Layout
///
/// - `vehicles[i].id == VehicleId(i)`; the fleet size never changes.
/// - `requests` is the active set, kept sorted by ascending id (ids are
///   issued in increasing order, so appends keep it sorted).
/// - `next_request_id` is the id the next generated request will get.  It
///   lives in the state, not in the engine, so stepping is a pure function
///   of (state, action, RNG).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub vehicles:        Vec<Vehicle>,
    pub requests:        Vec<Request>,
    pub tick:            Tick,
    /// Congestion level in `[0.8, 2.0]`; `1.0` is nominal.
    pub traffic_level:   f64,
    pub next_request_id: RequestId,
}

impl WorldState {
    /// Nominal traffic.
    pub const NOMINAL_TRAFFIC: f64 = 1.0;

    /// Assemble a snapshot from explicit parts.
    ///
    /// Vehicle ids are reassigned to match their index, requests are sorted
    /// by id, and `next_request_id` is set past the highest id present in
    /// the active set or held by a vehicle.
    pub fn new(mut vehicles: Vec<Vehicle>, mut requests: Vec<Request>, tick: Tick) -> Self {
        for (i, v) in vehicles.iter_mut().enumerate() {
            v.id = VehicleId(i as u32);
        }
        requests.sort_by_key(|r| r.id);
        requests.dedup_by_key(|r| r.id);
        let mut state = Self {
            vehicles,
            requests,
            tick,
            traffic_level: Self::NOMINAL_TRAFFIC,
            next_request_id: RequestId(0),
        };
        state.next_request_id = state
            .known_requests()
            .map(|r| r.id.next())
            .max()
            .unwrap_or(RequestId(0));
        state
    }

    /// Builder-style override of the traffic level.
    pub fn with_traffic(mut self, traffic_level: f64) -> Self {
        self.traffic_level = traffic_level;
        self
    }

    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    /// Look up an active request by id.
    pub fn request(&self, id: RequestId) -> Option<&Request> {
        self.requests
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|i| &self.requests[i])
    }

    /// Remove an active request, returning it.
    pub fn remove_request(&mut self, id: RequestId) -> Option<Request> {
        self.requests
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|i| self.requests.remove(i))
    }

    /// Insert into the active set, keeping it sorted.  An existing request
    /// with the same id is replaced.
    pub fn insert_request(&mut self, request: Request) {
        if request.id >= self.next_request_id {
            self.next_request_id = request.id.next();
        }
        match self.requests.binary_search_by_key(&request.id, |r| r.id) {
            Ok(i)  => self.requests[i] = request,
            Err(i) => self.requests.insert(i, request),
        }
    }

    /// `true` if some vehicle currently holds request `id`.
    pub fn is_claimed(&self, id: RequestId) -> bool {
        self.vehicles.iter().any(|v| v.request_id() == Some(id))
    }

    /// Ids of every request some vehicle currently holds.
    pub fn claimed_requests(&self) -> impl Iterator<Item = RequestId> + '_ {
        self.vehicles.iter().filter_map(Vehicle::request_id)
    }

    /// Every request the state knows of: the active set, then those held by
    /// vehicles.  A claimed request waiting for pickup appears twice.
    pub fn known_requests(&self) -> impl Iterator<Item = &Request> + '_ {
        self.requests
            .iter()
            .chain(self.vehicles.iter().filter_map(|v| v.assigned_request.as_ref()))
    }

    /// Active requests no vehicle has claimed yet.
    pub fn unclaimed_requests(&self) -> impl Iterator<Item = &Request> + '_ {
        self.requests.iter().filter(|r| !self.is_claimed(r.id))
    }

    pub fn idle_vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter().filter(|v| v.is_idle())
    }

    /// Sum of `waiting_time` over the active set.
    pub fn total_waiting_time(&self) -> u64 {
        self.requests.iter().map(|r| r.waiting_time as u64).sum()
    }

    /// `true` if every vehicle satisfies its status invariant.
    pub fn is_consistent(&self) -> bool {
        self.vehicles.iter().enumerate().all(|(i, v)| v.id.index() == i && v.is_consistent())
    }
}
