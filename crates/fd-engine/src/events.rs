//! The per-step event summary handed to the reward evaluator and to
//! metrics observers.

use fd_core::{RequestId, VehicleId};
use fd_model::WorldState;

/// A vehicle dropping its passenger off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RideCompletion {
    pub vehicle: VehicleId,
    pub request: RequestId,
}

/// What happened during one call to
/// [`TransitionEngine::step`][crate::TransitionEngine::step].
///
/// The first three lists record events in the order they occurred.  The
/// remaining fields describe the resulting state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Rides finished this tick.
    pub completed_rides:    Vec<RideCompletion>,
    /// Requests picked up (and removed from the active set) this tick.
    pub picked_up_requests: Vec<RequestId>,
    /// Requests that cancelled this tick.
    pub cancelled_requests: Vec<RequestId>,
    /// Vehicles that are not idle after the step.
    pub moving_vehicles:    Vec<VehicleId>,
    /// Vehicles that are idle after the step.
    pub idle_vehicles:      Vec<VehicleId>,
    /// Size of the active request set after the step.
    pub waiting_requests:   usize,
    /// Sum of `waiting_time` over the active set after the step.
    pub total_waiting_time: u64,
}

impl StepEvents {
    /// Fill the state-derived fields from the post-step state.
    pub(crate) fn summarize(&mut self, state: &WorldState) {
        self.moving_vehicles.clear();
        self.idle_vehicles.clear();
        for v in &state.vehicles {
            if v.is_idle() {
                self.idle_vehicles.push(v.id);
            } else {
                self.moving_vehicles.push(v.id);
            }
        }
        self.waiting_requests = state.requests.len();
        self.total_waiting_time = state.total_waiting_time();
    }
}
