//! Integration tests for fd-output.

#[cfg(test)]
mod csv_tests {
    use fd_model::VehicleStatus;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{TickSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(vehicle_id: u32, tick: u64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            vehicle_id,
            tick,
            x:      vehicle_id as i32,
            y:      2,
            status: VehicleStatus::Occupied,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            reward:          -1.25,
            completed:       1,
            picked_up:       2,
            cancelled:       0,
            moving:          3,
            idle:            2,
            active_requests: 4,
            traffic_level:   1.5,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("vehicle_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("a").join("b");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["vehicle_id", "tick", "x", "y", "status"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            [
                "tick", "reward", "completed", "picked_up", "cancelled", "moving", "idle",
                "active_requests", "traffic_level",
            ]
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "5");
        assert_eq!(&rows[2][2], "2"); // x
        assert_eq!(&rows[1][4], "occupied");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "-1.2500");
        assert_eq!(&rows[0][7], "4");
        assert_eq!(&rows[0][8], "1.5000");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use fd_core::{Cell, DispatchConfig, RequestId, Tick, VehicleId};
    use fd_model::{Request, Vehicle, WorldState};
    use fd_policy::GreedyPolicy;
    use fd_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::{CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver};
    use crate::row::{TickSummaryRow, VehicleSnapshotRow};

    fn quiet_config() -> DispatchConfig {
        DispatchConfig {
            grid_size:            5,
            vehicle_count:        2,
            request_rate:         0.0,
            cancellation_prob:    0.0,
            cancellation_slope:   0.0,
            traffic_delay_factor: 0.0,
            traffic_noise:        0.0,
            ..DispatchConfig::default()
        }
    }

    fn start() -> WorldState {
        WorldState::new(
            vec![
                Vehicle::idle(VehicleId(0), Cell::new(0, 0)),
                Vehicle::idle(VehicleId(1), Cell::new(4, 4)),
            ],
            vec![Request::new(RequestId(0), Cell::new(2, 2), Cell::new(3, 3), Tick(0))],
            Tick(0),
        )
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(quiet_config(), GreedyPolicy::plain(5).unwrap())
            .initial_state(start())
            .horizon(8)
            .build()
            .unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer).snapshot_every(2);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 8);
        let completed: u64 = rows.iter().map(|r| r[2].parse::<u64>().unwrap()).sum();
        assert_eq!(completed, 1);

        // Post-step ticks 2, 4, 6, 8 × 2 vehicles.
        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let snaps: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(snaps.len(), 8);
        assert_eq!(&snaps[0][1], "2");
    }

    struct FailingWriter {
        calls: u32,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.calls))))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(quiet_config(), GreedyPolicy::plain(5).unwrap())
            .initial_state(start())
            .horizon(3)
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter { calls: 0 });
        sim.run(&mut obs).unwrap();
        let err = obs.take_error().unwrap();
        assert_eq!(err.to_string(), "I/O error: write 1");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 3);
    }
}
