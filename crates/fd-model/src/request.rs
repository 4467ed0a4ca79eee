//! Ride requests.

use fd_core::{Cell, RequestId, Tick};

/// A customer asking to be carried from `origin` to `destination`.
///
/// A request lives in the active set from its arrival until it is picked up
/// or cancelled.  `waiting_time` counts ticks spent in the active set; it
/// stops growing at pickup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub id:           RequestId,
    pub origin:       Cell,
    pub destination:  Cell,
    pub arrival_tick: Tick,
    pub waiting_time: u32,
    pub cancelled:    bool,
}

impl Request {
    /// A fresh request that has not waited yet.
    pub fn new(id: RequestId, origin: Cell, destination: Cell, arrival_tick: Tick) -> Self {
        Self {
            id,
            origin,
            destination,
            arrival_tick,
            waiting_time: 0,
            cancelled:    false,
        }
    }

    /// Length of the ride itself in ticks (no traffic delay).
    #[inline]
    pub fn trip_length(&self) -> u32 {
        self.origin.manhattan(self.destination)
    }
}
