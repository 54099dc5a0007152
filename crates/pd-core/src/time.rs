//! Simulated time-of-day model.
//!
//! # Design
//!
//! The simulator covers a single working day, so time is a time-of-day
//! offset from midnight held in integer **milliseconds**:
//!
//!   SimTime(ms) = hours * 3_600_000 + minutes * 60_000 + seconds * 1_000
//!
//! Using an integer as the canonical unit keeps clock comparisons exact (a
//! leg either arrives at or before the snapshot or it does not).  Only leg
//! *durations* are derived from floating-point miles; they are rounded to the
//! nearest millisecond once, in [`SimSpan::from_hours`].

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

const MS_PER_SEC:  u64 = 1_000;
const MS_PER_MIN:  u64 = 60 * MS_PER_SEC;
const MS_PER_HOUR: u64 = 60 * MS_PER_MIN;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An instant on the simulated day, in milliseconds after midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const MIDNIGHT: SimTime = SimTime(0);

    /// The "end of day" sentinel used for `EOD` snapshots and deadlines.
    pub const END_OF_DAY: SimTime = SimTime::from_hms(23, 59, 0);

    /// Build a time from wall-clock components.  No range checking; use
    /// [`SimTime::parse_clock`] for untrusted input.
    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> SimTime {
        SimTime(
            hours as u64 * MS_PER_HOUR + minutes as u64 * MS_PER_MIN + seconds as u64 * MS_PER_SEC,
        )
    }

    /// Break into (hours, minutes, seconds), truncating milliseconds.
    pub fn hms(self) -> (u32, u32, u32) {
        let hours = (self.0 / MS_PER_HOUR) as u32;
        let minutes = ((self.0 % MS_PER_HOUR) / MS_PER_MIN) as u32;
        let seconds = ((self.0 % MS_PER_MIN) / MS_PER_SEC) as u32;
        (hours, minutes, seconds)
    }

    /// Time elapsed from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: SimTime) -> SimSpan {
        SimSpan(self.0.saturating_sub(earlier.0))
    }

    /// Parse a 24-hour `HH:MM` or `HH:MM:SS` clock value.
    ///
    /// Returns `None` for anything else, including out-of-range fields.
    pub fn parse_clock(s: &str) -> Option<SimTime> {
        let mut parts = s.trim().split(':');
        let hours: u32 = parts.next()?.trim().parse().ok()?;
        let minutes: u32 = parts.next()?.trim().parse().ok()?;
        let seconds: u32 = match parts.next() {
            Some(p) => p.trim().parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() || hours > 23 || minutes > 59 || seconds > 59 {
            return None;
        }
        Some(SimTime::from_hms(hours, minutes, seconds))
    }
}

impl std::ops::Add<SimSpan> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: SimSpan) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign<SimSpan> for SimTime {
    #[inline]
    fn add_assign(&mut self, rhs: SimSpan) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

impl FromStr for SimTime {
    type Err = CoreError;

    /// Same grammar as [`parse_snapshot`].
    fn from_str(s: &str) -> CoreResult<SimTime> {
        parse_snapshot(s)
    }
}

impl TryFrom<String> for SimTime {
    type Error = CoreError;
    fn try_from(s: String) -> CoreResult<SimTime> {
        parse_snapshot(&s)
    }
}

impl From<SimTime> for String {
    fn from(t: SimTime) -> String {
        t.to_string()
    }
}

/// Parse a snapshot request: `HH:MM`, `HH:MM:SS`, or `EOD` (any case).
pub fn parse_snapshot(s: &str) -> CoreResult<SimTime> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("EOD") {
        return Ok(SimTime::END_OF_DAY);
    }
    SimTime::parse_clock(trimmed).ok_or_else(|| CoreError::InvalidSnapshotTime(s.to_owned()))
}

// ── SimSpan ───────────────────────────────────────────────────────────────────

/// A length of simulated time in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SimSpan(pub u64);

impl SimSpan {
    pub const ZERO: SimSpan = SimSpan(0);

    /// Convert fractional hours (miles / mph) to a span, rounding to the
    /// nearest millisecond.  Negative or non-finite input yields zero.
    pub fn from_hours(hours: f64) -> SimSpan {
        if !hours.is_finite() || hours <= 0.0 {
            return SimSpan::ZERO;
        }
        SimSpan((hours * MS_PER_HOUR as f64).round() as u64)
    }

    pub fn from_minutes(minutes: u64) -> SimSpan {
        SimSpan(minutes * MS_PER_MIN)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn as_minutes_f64(self) -> f64 {
        self.0 as f64 / MS_PER_MIN as f64
    }

    /// Fraction of `whole` covered by `self`, clamped to `[0.0, 1.0]`.
    ///
    /// A zero-length `whole` counts as fully covered.
    pub fn fraction_of(self, whole: SimSpan) -> f64 {
        if whole.is_zero() {
            return 1.0;
        }
        (self.0 as f64 / whole.0 as f64).clamp(0.0, 1.0)
    }
}

impl fmt::Display for SimSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} min", self.as_minutes_f64())
    }
}

// ── Deadline ──────────────────────────────────────────────────────────────────

/// Delivery deadline from the package table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Deadline {
    /// Deliver at or before this time.
    By(SimTime),
    /// No specific cutoff (`EOD` in the input).
    EndOfDay,
}

impl Deadline {
    /// The latest acceptable delivery time.
    pub fn cutoff(self) -> SimTime {
        match self {
            Deadline::By(t) => t,
            Deadline::EndOfDay => SimTime::END_OF_DAY,
        }
    }

    /// `true` if a delivery at `at` misses this deadline.
    pub fn is_missed_by(self, at: SimTime) -> bool {
        at > self.cutoff()
    }

    /// Parse `EOD`, a 12-hour `H:MM AM` / `H:MM PM` value, or a 24-hour clock.
    pub fn parse(s: &str) -> CoreResult<Deadline> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("EOD") {
            return Ok(Deadline::EndOfDay);
        }

        let upper = trimmed.to_ascii_uppercase();
        let (clock, meridiem) = if let Some(c) = upper.strip_suffix("AM") {
            (c.trim(), Some(false))
        } else if let Some(c) = upper.strip_suffix("PM") {
            (c.trim(), Some(true))
        } else {
            (upper.as_str(), None)
        };

        let invalid = || CoreError::InvalidDeadline(s.to_owned());
        let time = SimTime::parse_clock(clock).ok_or_else(invalid)?;
        let time = match meridiem {
            None => time,
            Some(pm) => {
                let (h, m, sec) = time.hms();
                if h == 0 || h > 12 {
                    return Err(invalid());
                }
                let h24 = match (h, pm) {
                    (12, false) => 0,
                    (12, true) => 12,
                    (h, false) => h,
                    (h, true) => h + 12,
                };
                SimTime::from_hms(h24, m, sec)
            }
        };
        Ok(Deadline::By(time))
    }
}

impl FromStr for Deadline {
    type Err = CoreError;
    fn from_str(s: &str) -> CoreResult<Deadline> {
        Deadline::parse(s)
    }
}

impl fmt::Display for Deadline {
    /// Renders the way the package table writes deadlines (`10:30 AM`, `EOD`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deadline::EndOfDay => f.write_str("EOD"),
            Deadline::By(t) => {
                let (h, m, _) = t.hms();
                let suffix = if h < 12 { "AM" } else { "PM" };
                let h12 = match h % 12 {
                    0 => 12,
                    h => h,
                };
                write!(f, "{h12}:{m:02} {suffix}")
            }
        }
    }
}
