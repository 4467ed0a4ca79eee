//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter; every call to the
//! transition engine advances it by exactly one.  One tick is five simulated
//! minutes, so a day is 288 ticks and the hour of day is
//!
//!   hour = (tick mod 288) / 12
//!
//! Demand and congestion both follow the same three time-of-day bands
//! ([`DayPeriod`]): two rush bands, a late-night band, and everything else.

use std::fmt;

/// Ticks in one simulated day (5-minute ticks).
pub const TICKS_PER_DAY: u64 = 288;

/// Ticks in one simulated hour.
pub const TICKS_PER_HOUR: u64 = 12;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`; 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Fractional hour of day in `[0, 24)`.
    #[inline]
    pub fn hour_of_day(self) -> f64 {
        (self.0 % TICKS_PER_DAY) as f64 / TICKS_PER_HOUR as f64
    }

    /// Zero-based simulated day this tick falls on.
    #[inline]
    pub fn day(self) -> u64 {
        self.0 / TICKS_PER_DAY
    }

    /// Time-of-day band this tick falls in.
    #[inline]
    pub fn period(self) -> DayPeriod {
        DayPeriod::at_hour(self.hour_of_day())
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = (self.hour_of_day() * 60.0).round() as u32;
        write!(f, "T{} (day {} {:02}:{:02})", self.0, self.day(), minutes / 60, minutes % 60)
    }
}

// ── DayPeriod ─────────────────────────────────────────────────────────────────

/// Time-of-day band driving both the demand multiplier and the traffic
/// baseline.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayPeriod {
    /// 07:00–09:00 and 17:00–19:00.
    Rush,
    /// 23:00–05:00.
    LateNight,
    /// Everything else.
    Normal,
}

impl DayPeriod {
    /// Classify a fractional hour of day.
    pub fn at_hour(hour: f64) -> DayPeriod {
        if (7.0..9.0).contains(&hour) || (17.0..19.0).contains(&hour) {
            DayPeriod::Rush
        } else if hour >= 23.0 || hour < 5.0 {
            DayPeriod::LateNight
        } else {
            DayPeriod::Normal
        }
    }

    /// Multiplier applied to the base request rate.
    #[inline]
    pub fn demand_multiplier(self) -> f64 {
        match self {
            DayPeriod::Rush      => 2.0,
            DayPeriod::LateNight => 0.5,
            DayPeriod::Normal    => 1.0,
        }
    }

    /// Congestion level the traffic process is pulled toward.
    #[inline]
    pub fn traffic_baseline(self) -> f64 {
        match self {
            DayPeriod::Rush      => 1.5,
            DayPeriod::LateNight => 0.8,
            DayPeriod::Normal    => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayPeriod::Rush      => "rush",
            DayPeriod::LateNight => "late_night",
            DayPeriod::Normal    => "normal",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
