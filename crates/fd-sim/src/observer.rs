//! Episode observer trait for progress reporting and data collection.

use fd_core::Tick;
use fd_engine::StepEvents;
use fd_model::{JointAction, WorldState};

use crate::EpisodeSummary;

/// Everything known about one completed tick.
#[derive(Debug, Clone, Copy)]
pub struct TickReport<'a> {
    /// The tick the action was chosen at (the pre-step tick).
    pub tick:   Tick,
    pub action: &'a JointAction,
    pub events: &'a StepEvents,
    pub reward: f64,
    /// The state after the step.
    pub state:  &'a WorldState,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example (progress printer)
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, report: &TickReport<'_>) {
///         if report.tick.0 % self.interval == 0 {
///             println!("{}: reward {:.2}", report.tick, report.reward);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the policy is asked for an action.
    fn on_tick_start(&mut self, _tick: Tick, _state: &WorldState) {}

    /// Called after the step has been applied and scored.
    fn on_tick_end(&mut self, _report: &TickReport<'_>) {}

    /// Called once by [`Sim::run`][crate::Sim::run] after the final tick.
    fn on_episode_end(&mut self, _final_state: &WorldState, _summary: &EpisodeSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
