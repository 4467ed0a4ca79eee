//! Per-vehicle actions and the joint action applied in one tick.

use std::collections::BTreeMap;

use fd_core::{Cell, RequestId, VehicleId};

/// What one vehicle is told to do this tick.
///
/// `Assign` and `Move` only take effect on an idle vehicle; the engine
/// silently ignores them otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    #[default]
    Idle,
    /// Drive to and serve the active request with this id.
    Assign(RequestId),
    /// Drive empty to this cell.
    Move(Cell),
}

/// One [`Action`] per vehicle, applied atomically by a single transition.
///
/// Stored sparsely: a vehicle without an entry is idle.  Setting a vehicle
/// to [`Action::Idle`] removes its entry, so every all-idle joint action
/// compares equal to [`JointAction::all_idle`].  Iteration is in ascending
/// vehicle id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointAction {
    actions: BTreeMap<VehicleId, Action>,
}

impl JointAction {
    /// Every vehicle idles.
    pub fn all_idle() -> Self {
        Self::default()
    }

    /// A joint action where only `vehicle` acts.
    pub fn single(vehicle: VehicleId, action: Action) -> Self {
        Self::all_idle().with(vehicle, action)
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, vehicle: VehicleId, action: Action) -> Self {
        self.set(vehicle, action);
        self
    }

    /// Replace `vehicle`'s action.
    pub fn set(&mut self, vehicle: VehicleId, action: Action) {
        match action {
            Action::Idle => {
                self.actions.remove(&vehicle);
            }
            other => {
                self.actions.insert(vehicle, other);
            }
        }
    }

    /// The action for `vehicle`; `Idle` if it has none.
    #[inline]
    pub fn get(&self, vehicle: VehicleId) -> Action {
        self.actions.get(&vehicle).copied().unwrap_or_default()
    }

    #[inline]
    pub fn is_all_idle(&self) -> bool {
        self.actions.is_empty()
    }

    /// Non-idle entries in ascending vehicle id.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleId, Action)> + '_ {
        self.actions.iter().map(|(&v, &a)| (v, a))
    }

    /// Number of vehicles with a non-idle action.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Request ids targeted by `Assign` entries, in vehicle order.
    pub fn assigned_requests(&self) -> impl Iterator<Item = RequestId> + '_ {
        self.actions.values().filter_map(|a| match a {
            Action::Assign(r) => Some(*r),
            _ => None,
        })
    }

    /// Highest vehicle id named, if any.
    pub fn max_vehicle(&self) -> Option<VehicleId> {
        self.actions.keys().next_back().copied()
    }
}

impl FromIterator<(VehicleId, Action)> for JointAction {
    fn from_iter<I: IntoIterator<Item = (VehicleId, Action)>>(iter: I) -> Self {
        let mut joint = JointAction::all_idle();
        for (v, a) in iter {
            joint.set(v, a);
        }
        joint
    }
}
