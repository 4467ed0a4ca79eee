//! The `Policy` trait: the uniform decision interface.

use fd_core::SimRng;
use fd_model::{JointAction, WorldState};

use crate::PolicyResult;

/// Anything that can decide what the fleet does next.
///
/// The MCTS planner and the baselines all implement this, so the simulator
/// and the experiment runner treat them interchangeably.
///
/// # Example
///
/// ```rust,ignore
/// struct SendEveryoneHome;
///
/// impl Policy for SendEveryoneHome {
///     fn name(&self) -> &str { "home" }
///
///     fn select_action(&self, state: &WorldState, _rng: &mut SimRng) -> PolicyResult<JointAction> {
///         Ok(state
///             .idle_vehicles()
///             .map(|v| (v.id, Action::Move(Cell::new(0, 0))))
///             .collect())
///     }
/// }
/// ```
pub trait Policy: Send + Sync {
    /// Short label used in logs and reports.
    fn name(&self) -> &str;

    /// Choose the joint action for `state`'s tick.
    ///
    /// Must not assume the action will be applied verbatim: the engine
    /// ignores whatever is inapplicable.
    fn select_action(&self, state: &WorldState, rng: &mut SimRng) -> PolicyResult<JointAction>;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_action(&self, state: &WorldState, rng: &mut SimRng) -> PolicyResult<JointAction> {
        (**self).select_action(state, rng)
    }
}

impl<P: Policy + ?Sized> Policy for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_action(&self, state: &WorldState, rng: &mut SimRng) -> PolicyResult<JointAction> {
        (**self).select_action(state, rng)
    }
}
