//! `TransitionEngine`: the generative model shared by the simulator, the
//! greedy baseline, and MCTS rollouts.

use fd_core::{DispatchConfig, RequestId, SimRng, VehicleId};
use fd_model::{Action, JointAction, Request, Vehicle, VehicleStatus, WorldState};
use tracing::trace;

use crate::{EngineError, EngineResult, RideCompletion, StepEvents, demand, traffic};

#[cfg(feature = "fx-hash")]
type ClaimSet = rustc_hash::FxHashSet<RequestId>;
#[cfg(not(feature = "fx-hash"))]
type ClaimSet = std::collections::HashSet<RequestId>;

/// The result of one [`TransitionEngine::step`].
#[derive(Debug, Clone)]
pub struct Transition {
    pub state:  WorldState,
    pub events: StepEvents,
}

/// Applies joint actions and the environment's stochastic dynamics.
///
/// Holds only the validated configuration, so a single engine is shared
/// freely (by reference) between planners and threads.
#[derive(Debug, Clone)]
pub struct TransitionEngine {
    config: DispatchConfig,
}

impl TransitionEngine {
    /// Validate `config` and build an engine around it.
    pub fn new(config: DispatchConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.config.grid_size
    }

    /// Episode start: the configured fleet idle at uniformly random cells,
    /// no requests, tick 0, nominal traffic.
    pub fn initial_state(&self, rng: &mut SimRng) -> WorldState {
        let vehicles = (0..self.config.vehicle_count)
            .map(|i| {
                let cell = demand::random_cell(self.config.grid_size, rng);
                Vehicle::idle(VehicleId(i as u32), cell)
            })
            .collect();
        WorldState::new(vehicles, Vec::new(), fd_core::Tick::ZERO)
    }

    /// Cancellation probability for a request that has waited `waiting_time`
    /// ticks: `base + slope × waiting_time`, capped.
    pub fn cancellation_probability(&self, waiting_time: u32) -> f64 {
        let c = &self.config;
        (c.cancellation_prob + c.cancellation_slope * f64::from(waiting_time))
            .min(c.max_cancellation_prob)
    }

    /// Advance `state` by one tick under `joint`.
    ///
    /// `state` is left untouched; the successor is a fresh deep copy.
    /// Returns [`EngineError::UnknownVehicle`] if `joint` names a vehicle id
    /// outside the fleet.  Every other inapplicable action is ignored.
    pub fn step(
        &self,
        state: &WorldState,
        joint: &JointAction,
        rng:   &mut SimRng,
    ) -> EngineResult<Transition> {
        if let Some(vehicle) = joint.max_vehicle() {
            if vehicle.index() >= state.vehicle_count() {
                return Err(EngineError::UnknownVehicle {
                    vehicle,
                    count: state.vehicle_count(),
                });
            }
        }

        let mut next = state.clone();
        let mut events = StepEvents::default();
        let now = state.tick;

        // ── Rule 1: apply actions ─────────────────────────────────────────
        self.apply_actions(&mut next, joint);

        // ── Rule 2: movement and arrivals at destinations ─────────────────
        self.advance_vehicles(&mut next, rng, &mut events);

        // ── Rule 3: new requests ──────────────────────────────────────────
        self.spawn_requests(&mut next, rng);

        // ── Rule 4: aging and cancellations ───────────────────────────────
        self.age_requests(&mut next, rng, &mut events);

        // ── Rule 5: traffic ───────────────────────────────────────────────
        next.traffic_level = traffic::next_level(now, self.config.traffic_noise, rng);

        // ── Rule 6: clock ─────────────────────────────────────────────────
        next.tick = now + 1;

        events.summarize(&next);
        Ok(Transition { state: next, events })
    }

    // ── Rules ─────────────────────────────────────────────────────────────

    fn apply_actions(&self, next: &mut WorldState, joint: &JointAction) {
        // Requests already held by a vehicle, plus those claimed earlier in
        // this same joint action.
        let mut claimed: ClaimSet = next.claimed_requests().collect();

        for (vid, action) in joint.iter() {
            if !next.vehicles[vid.index()].is_idle() {
                trace!(%vid, ?action, "action ignored: vehicle busy");
                continue;
            }
            match action {
                Action::Idle => {}
                Action::Assign(rid) => {
                    if claimed.contains(&rid) {
                        trace!(%vid, %rid, "assign ignored: request already claimed");
                        continue;
                    }
                    let Some(request) = next.request(rid).filter(|r| !r.cancelled).cloned() else {
                        trace!(%vid, %rid, "assign ignored: request not active");
                        continue;
                    };
                    claimed.insert(rid);
                    next.vehicles[vid.index()].begin_pickup(request);
                }
                Action::Move(target) => {
                    if !target.in_grid(self.config.grid_size) {
                        trace!(%vid, %target, "move ignored: target off grid");
                        continue;
                    }
                    next.vehicles[vid.index()].begin_reposition(target);
                }
            }
        }
    }

    fn advance_vehicles(&self, next: &mut WorldState, rng: &mut SimRng, events: &mut StepEvents) {
        let delay_p = traffic::delay_probability(next.traffic_level, self.config.traffic_delay_factor);

        for v in next.vehicles.iter_mut() {
            if v.is_idle() {
                continue;
            }
            if v.remaining_travel_time > 0 {
                if let Some(dest) = v.destination {
                    v.position = v.position.step_toward(dest);
                }
                v.remaining_travel_time -= 1;
                if rng.gen_bool(delay_p) {
                    v.remaining_travel_time += 1;
                }
            }
            if v.remaining_travel_time > 0 {
                continue;
            }
            match v.status {
                VehicleStatus::EnRouteToPickup => {
                    if let Some(rid) = v.pick_up() {
                        trace!(vid = %v.id, %rid, "pickup");
                        events.picked_up_requests.push(rid);
                    }
                }
                VehicleStatus::Occupied => {
                    if let Some(request) = v.arrive() {
                        trace!(vid = %v.id, rid = %request.id, "ride completed");
                        events.completed_rides.push(RideCompletion {
                            vehicle: v.id,
                            request: request.id,
                        });
                    }
                }
                VehicleStatus::Repositioning => {
                    v.arrive();
                }
                VehicleStatus::Idle => {}
            }
        }

        for &rid in &events.picked_up_requests {
            next.remove_request(rid);
        }
    }

    fn spawn_requests(&self, next: &mut WorldState, rng: &mut SimRng) {
        let mean = demand::arrival_mean(self.config.request_rate, next.tick);
        let count = demand::sample_arrivals(mean, rng);
        for _ in 0..count {
            let Some((origin, destination)) = demand::random_trip(self.config.grid_size, rng) else {
                break;
            };
            let id = next.next_request_id;
            next.insert_request(Request::new(id, origin, destination, next.tick));
        }
    }

    fn age_requests(&self, next: &mut WorldState, rng: &mut SimRng, events: &mut StepEvents) {
        for request in next.requests.iter_mut() {
            request.waiting_time += 1;
            if rng.gen_bool(self.cancellation_probability(request.waiting_time)) {
                request.cancelled = true;
                events.cancelled_requests.push(request.id);
            }
        }
        if events.cancelled_requests.is_empty() {
            return;
        }
        next.requests.retain(|r| !r.cancelled);

        // A vehicle driving to a cancelled pickup becomes free where it is.
        for v in next.vehicles.iter_mut() {
            if v.status == VehicleStatus::EnRouteToPickup
                && v.request_id().is_some_and(|rid| events.cancelled_requests.contains(&rid))
            {
                trace!(vid = %v.id, "pickup cancelled, vehicle released");
                v.release();
            }
        }
    }
}
