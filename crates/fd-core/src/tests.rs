//! Unit tests for fd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RequestId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn request_ids_increase() {
        assert!(RequestId(0) < RequestId(0).next());
        assert_eq!(RequestId(7).next(), RequestId(8));
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
        assert_eq!(RequestId(3).to_string(), "RequestId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Cell;

    #[test]
    fn manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(2, 2)), 4);
        assert_eq!(Cell::new(2, 2).manhattan(Cell::new(3, 3)), 2);
        assert_eq!(Cell::new(4, 1).manhattan(Cell::new(4, 1)), 0);
    }

    #[test]
    fn step_resolves_x_before_y() {
        let target = Cell::new(2, 2);
        let mut c = Cell::new(0, 0);
        let mut path = vec![];
        while c != target {
            c = c.step_toward(target);
            path.push(c);
        }
        assert_eq!(path, [Cell::new(1, 0), Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)]);
    }

    #[test]
    fn step_at_target_is_noop() {
        let c = Cell::new(3, 1);
        assert_eq!(c.step_toward(c), c);
    }

    #[test]
    fn step_negative_directions() {
        assert_eq!(Cell::new(3, 3).step_toward(Cell::new(1, 3)), Cell::new(2, 3));
        assert_eq!(Cell::new(1, 3).step_toward(Cell::new(1, 0)), Cell::new(1, 2));
    }

    #[test]
    fn offset_is_clamped_to_grid() {
        assert_eq!(Cell::new(0, 0).offset_clamped((-1, 0), 5), Cell::new(0, 0));
        assert_eq!(Cell::new(4, 4).offset_clamped((0, 1), 5), Cell::new(4, 4));
        assert_eq!(Cell::new(2, 2).offset_clamped((1, 0), 5), Cell::new(3, 2));
    }

    #[test]
    fn grid_containment() {
        assert!(Cell::new(0, 0).in_grid(1));
        assert!(Cell::new(4, 4).in_grid(5));
        assert!(!Cell::new(5, 0).in_grid(5));
        assert!(!Cell::new(-1, 2).in_grid(5));
    }
}

#[cfg(test)]
mod time {
    use crate::{DayPeriod, TICKS_PER_DAY, TICKS_PER_HOUR, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(10).since(Tick(15)), 0, "never underflows");
    }

    #[test]
    fn hour_of_day_wraps_daily() {
        assert_eq!(Tick(0).hour_of_day(), 0.0);
        assert_eq!(Tick(TICKS_PER_HOUR * 7).hour_of_day(), 7.0);
        assert_eq!(Tick(TICKS_PER_DAY + TICKS_PER_HOUR).hour_of_day(), 1.0);
        assert_eq!(Tick(TICKS_PER_DAY * 3).day(), 3);
    }

    #[test]
    fn periods() {
        assert_eq!(DayPeriod::at_hour(7.0), DayPeriod::Rush);
        assert_eq!(DayPeriod::at_hour(8.99), DayPeriod::Rush);
        assert_eq!(DayPeriod::at_hour(9.0), DayPeriod::Normal);
        assert_eq!(DayPeriod::at_hour(17.5), DayPeriod::Rush);
        assert_eq!(DayPeriod::at_hour(23.0), DayPeriod::LateNight);
        assert_eq!(DayPeriod::at_hour(4.9), DayPeriod::LateNight);
        assert_eq!(DayPeriod::at_hour(5.0), DayPeriod::Normal);
        assert_eq!(Tick(0).period(), DayPeriod::LateNight);
    }

    #[test]
    fn period_multipliers() {
        assert_eq!(DayPeriod::Rush.demand_multiplier(), 2.0);
        assert_eq!(DayPeriod::LateNight.demand_multiplier(), 0.5);
        assert_eq!(DayPeriod::Normal.demand_multiplier(), 1.0);
        assert_eq!(DayPeriod::Rush.traffic_baseline(), 1.5);
        assert_eq!(DayPeriod::LateNight.traffic_baseline(), 0.8);
        assert_eq!(DayPeriod::Normal.traffic_baseline(), 1.0);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(TICKS_PER_DAY + 90).to_string(), "T378 (day 1 07:30)");
        assert_eq!(DayPeriod::LateNight.to_string(), "late_night");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn streams_differ() {
        let mut r0 = SimRng::for_stream(1, 0);
        let mut r1 = SimRng::for_stream(1, 1);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "adjacent streams should diverge");
    }

    #[test]
    fn clone_replays_sequence() {
        let mut a = SimRng::new(9);
        let _: u64 = a.random();
        let mut b = a.clone();
        for _ in 0..10 {
            assert_eq!(a.random::<u32>(), b.random::<u32>());
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.0), "probabilities are clamped");
    }

    #[test]
    fn symmetric_in_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..1000 {
            let v = rng.symmetric(0.1);
            assert!((-0.1..=0.1).contains(&v));
        }
        assert_eq!(rng.symmetric(0.0), 0.0);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }
}

#[cfg(test)]
mod config {
    use crate::DispatchConfig;

    #[test]
    fn default_is_valid() {
        DispatchConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_grid_rejected() {
        let cfg = DispatchConfig { grid_size: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_fleet_rejected() {
        let cfg = DispatchConfig { vehicle_count: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn probabilities_checked() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let cfg = DispatchConfig { cancellation_prob: bad, ..Default::default() };
            assert!(cfg.validate().is_err(), "cancellation_prob {bad} accepted");
        }
        let cfg = DispatchConfig { traffic_delay_factor: 0.6, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_rate_rejected() {
        let cfg = DispatchConfig { request_rate: -1.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_rates_are_valid() {
        let cfg = DispatchConfig {
            request_rate:         0.0,
            cancellation_prob:    0.0,
            cancellation_slope:   0.0,
            traffic_delay_factor: 0.0,
            traffic_noise:        0.0,
            ..Default::default()
        };
        cfg.validate().unwrap();
    }
}
