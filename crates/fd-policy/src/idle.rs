//! A policy that never dispatches.

use fd_core::SimRng;
use fd_model::{JointAction, WorldState};

use crate::{Policy, PolicyResult};

/// Always returns the all-idle joint action.
///
/// Useful as a lower bound in comparisons and as a placeholder in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePolicy;

impl Policy for IdlePolicy {
    fn name(&self) -> &str {
        "idle"
    }

    fn select_action(&self, _state: &WorldState, _rng: &mut SimRng) -> PolicyResult<JointAction> {
        Ok(JointAction::all_idle())
    }
}
