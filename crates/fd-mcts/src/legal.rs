//! Candidate joint actions considered by the planner.

use fd_model::{Action, JointAction, WorldState};

/// Joint actions worth exploring from `state`.
///
/// All-idle comes first.  Then, for every idle vehicle in ascending id and
/// every active, unclaimed request in ascending id whose origin is within
/// `distance_cutoff` (Manhattan) of the vehicle, the joint action in which
/// only that vehicle acts and takes that request.
///
/// Never empty.
pub fn legal_actions(state: &WorldState, distance_cutoff: u32) -> Vec<JointAction> {
    let open: Vec<_> = state.unclaimed_requests().filter(|r| !r.cancelled).collect();
    let mut actions = vec![JointAction::all_idle()];
    for vehicle in state.idle_vehicles() {
        for request in &open {
            if vehicle.position.manhattan(request.origin) <= distance_cutoff {
                actions.push(JointAction::single(vehicle.id, Action::Assign(request.id)));
            }
        }
    }
    actions
}
