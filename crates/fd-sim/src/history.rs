//! Per-episode bookkeeping and summary metrics.

use std::collections::BTreeMap;

use fd_core::{RequestId, Tick};
use fd_engine::StepEvents;
use fd_model::WorldState;

/// Life cycle of one request as seen by the episode.
///
/// Event ticks are the tick at which the step producing the event started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestRecord {
    pub arrival_tick: Tick,
    pub pickup_tick:  Option<Tick>,
    pub dropoff_tick: Option<Tick>,
    pub cancel_tick:  Option<Tick>,
}

impl RequestRecord {
    fn arrived(tick: Tick) -> Self {
        RequestRecord { arrival_tick: tick, pickup_tick: None, dropoff_tick: None, cancel_tick: None }
    }

    /// Ticks spent waiting, once the request has been picked up or cancelled.
    pub fn wait(&self) -> Option<u64> {
        self.pickup_tick
            .or(self.cancel_tick)
            .map(|end| end.since(self.arrival_tick))
    }
}

/// Headline numbers of one episode.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EpisodeSummary {
    pub ticks:              u64,
    pub completed_rides:    u64,
    pub cancelled_requests: u64,
    /// Mean wait over requests that were picked up or cancelled.
    pub average_wait:       f64,
    /// Mean number of idle ticks per vehicle.
    pub average_idle:       f64,
    /// Profit per ride × completed rides.
    pub revenue:            f64,
    pub total_reward:       f64,
}

/// Accumulates what happened during an episode, one step at a time.
#[derive(Debug, Clone, Default)]
pub struct EpisodeHistory {
    pub requests:        BTreeMap<RequestId, RequestRecord>,
    /// Idle ticks per vehicle, indexed by vehicle id.
    pub idle_ticks:      Vec<u64>,
    pub rewards:         Vec<f64>,
    pub completed_rides: u64,
    pub cancelled:       u64,
    profit_per_ride:     f64,
}

impl EpisodeHistory {
    pub fn new(vehicle_count: usize, profit_per_ride: f64) -> Self {
        EpisodeHistory {
            idle_ticks: vec![0; vehicle_count],
            profit_per_ride,
            ..Default::default()
        }
    }

    /// Record the step `prev → next`.
    pub fn record(&mut self, prev: &WorldState, next: &WorldState, events: &StepEvents, reward: f64) {
        let now = prev.tick;

        // Requests already waiting before the step (the initial state may
        // carry some) and those that arrived during it.
        for r in prev.requests.iter().chain(&next.requests) {
            self.requests.entry(r.id).or_insert_with(|| RequestRecord::arrived(r.arrival_tick));
        }

        for &rid in &events.picked_up_requests {
            self.seen(rid, now).pickup_tick = Some(now);
        }
        for ride in &events.completed_rides {
            self.seen(ride.request, now).dropoff_tick = Some(now);
            self.completed_rides += 1;
        }
        for &rid in &events.cancelled_requests {
            // Arrived and cancelled within this same step: never visible
            // in either state.
            self.seen(rid, now).cancel_tick = Some(now);
            self.cancelled += 1;
        }

        for vid in &events.idle_vehicles {
            if let Some(slot) = self.idle_ticks.get_mut(vid.index()) {
                *slot += 1;
            }
        }
        self.rewards.push(reward);
    }

    fn seen(&mut self, id: RequestId, now: Tick) -> &mut RequestRecord {
        self.requests.entry(id).or_insert_with(|| RequestRecord::arrived(now))
    }

    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }

    pub fn summary(&self) -> EpisodeSummary {
        let waits: Vec<u64> = self.requests.values().filter_map(RequestRecord::wait).collect();
        let average_wait = if waits.is_empty() {
            0.0
        } else {
            waits.iter().sum::<u64>() as f64 / waits.len() as f64
        };
        let average_idle = if self.idle_ticks.is_empty() {
            0.0
        } else {
            self.idle_ticks.iter().sum::<u64>() as f64 / self.idle_ticks.len() as f64
        };
        EpisodeSummary {
            ticks: self.rewards.len() as u64,
            completed_rides: self.completed_rides,
            cancelled_requests: self.cancelled,
            average_wait,
            average_idle,
            revenue: self.profit_per_ride * self.completed_rides as f64,
            total_reward: self.total_reward(),
        }
    }
}
