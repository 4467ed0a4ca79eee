//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use fd_model::WorldState;
use fd_sim::{EpisodeSummary, SimObserver, TickReport};

use crate::row::{TickSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries and vehicle snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    /// Snapshot the fleet whenever the post-step tick is a multiple of this.
    /// 0 disables snapshots.
    snapshot_every: u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Observer backed by `writer`, snapshotting the fleet every tick.
    pub fn new(writer: W) -> Self {
        Self { writer, snapshot_every: 1, last_error: None }
    }

    pub fn snapshot_every(mut self, ticks: u64) -> Self {
        self.snapshot_every = ticks;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the episode).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport<'_>) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(report));
        self.store_err(result);

        let tick = report.state.tick.0;
        if self.snapshot_every > 0 && tick.is_multiple_of(self.snapshot_every) {
            let rows: Vec<VehicleSnapshotRow> = report
                .state
                .vehicles
                .iter()
                .map(|v| VehicleSnapshotRow::of(v, tick))
                .collect();
            if !rows.is_empty() {
                let result = self.writer.write_snapshots(&rows);
                self.store_err(result);
            }
        }
    }

    fn on_episode_end(&mut self, _final_state: &WorldState, _summary: &EpisodeSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
