//! Signed spans between same-kind temporal values.
//!
//! [`Duration::between`] reasons in seconds and nanoseconds, so its operands
//! must be values that can supply a second-resolution position: a
//! [`Time`], a [`DateTime`] or an [`Instant`]. Both operands must be of
//! the *same* kind. Mixing kinds fails with
//! [`TemporalError::Incompatible`], and a bare [`Date`] is never a valid
//! operand: a calendar day has no seconds to measure. Whole-day distances
//! between dates go through [`Date::days_until`] instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::datetime::DateTime;
use crate::error::{Result, TemporalError};
use crate::instant::Instant;
use crate::time::Time;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

// ── Operand kinds ───────────────────────────────────────────────────────────

/// The kind tag of a temporal operand, used in compatibility diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalKind {
    Date,
    Time,
    DateTime,
    Instant,
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemporalKind::Date => "a calendar date",
            TemporalKind::Time => "a time-of-day",
            TemporalKind::DateTime => "a date-time",
            TemporalKind::Instant => "an instant",
        };
        f.write_str(name)
    }
}

/// A duration operand: one of the temporal value kinds, tagged.
///
/// This is a closed set dispatched by `match`; the supported kinds are
/// fixed at design time. Each value type converts in via `From`, so
/// [`Duration::between`] accepts the concrete types directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    Date(Date),
    Time(Time),
    DateTime(DateTime),
    Instant(Instant),
}

impl Temporal {
    /// The kind tag of this operand.
    pub fn kind(&self) -> TemporalKind {
        match self {
            Temporal::Date(_) => TemporalKind::Date,
            Temporal::Time(_) => TemporalKind::Time,
            Temporal::DateTime(_) => TemporalKind::DateTime,
            Temporal::Instant(_) => TemporalKind::Instant,
        }
    }
}

impl From<Date> for Temporal {
    fn from(value: Date) -> Temporal {
        Temporal::Date(value)
    }
}

impl From<Time> for Temporal {
    fn from(value: Time) -> Temporal {
        Temporal::Time(value)
    }
}

impl From<DateTime> for Temporal {
    fn from(value: DateTime) -> Temporal {
        Temporal::DateTime(value)
    }
}

impl From<Instant> for Temporal {
    fn from(value: Instant) -> Temporal {
        Temporal::Instant(value)
    }
}

// ── Duration ────────────────────────────────────────────────────────────────

/// A signed span of time in seconds and nanoseconds.
///
/// The nanosecond part is always 0..=999 999 999; negative spans carry the
/// sign in `seconds`, so minus one and a half seconds is
/// `{ seconds: -2, nanos: 500_000_000 }`. A duration holds no reference to
/// the values it was computed between and is not divided into calendar
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Duration {
    seconds: i64,
    nanos: u32,
}

impl Duration {
    /// The zero-length span.
    pub const fn zero() -> Duration {
        Duration {
            seconds: 0,
            nanos: 0,
        }
    }

    /// Creates a duration from seconds plus a nanosecond adjustment of any
    /// size or sign, normalizing by carrying whole seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::Overflow`] if the carried seconds leave the
    /// representable range.
    pub fn new(seconds: i64, nano_adjustment: i64) -> Result<Duration> {
        let carry = nano_adjustment.div_euclid(1_000_000_000);
        let nanos = nano_adjustment.rem_euclid(1_000_000_000) as u32;
        let seconds = seconds
            .checked_add(carry)
            .ok_or(TemporalError::Overflow("duration seconds out of range"))?;
        Ok(Duration { seconds, nanos })
    }

    /// The signed span between two temporal values of the same kind.
    ///
    /// Positive when `b` is chronologically after `a`; zero when they are
    /// equal.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::Incompatible`] when the operands are of
    /// different kinds, or when either operand is a bare calendar date:
    /// dates carry no second-resolution position, so even two dates are
    /// rejected here (use [`Date::days_until`] for whole days).
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora_core::{Duration, Time};
    ///
    /// let start = Time::of_hms(13, 45, 0)?;
    /// let end = Time::of_hms(13, 45, 30)?;
    /// assert_eq!(Duration::between(start, end)?.seconds(), 30);
    /// # Ok::<(), tempora_core::TemporalError>(())
    /// ```
    pub fn between(a: impl Into<Temporal>, b: impl Into<Temporal>) -> Result<Duration> {
        let (a, b) = (a.into(), b.into());
        let total_nanos = match (a, b) {
            (Temporal::Time(x), Temporal::Time(y)) => {
                (y.second_of_day() as i128 - x.second_of_day() as i128) * NANOS_PER_SECOND
            }
            (Temporal::DateTime(x), Temporal::DateTime(y)) => {
                (y.epoch_second() as i128 - x.epoch_second() as i128) * NANOS_PER_SECOND
            }
            (Temporal::Instant(x), Temporal::Instant(y)) => y.total_nanos() - x.total_nanos(),
            (left, right) => {
                return Err(TemporalError::Incompatible {
                    left: left.kind(),
                    right: right.kind(),
                })
            }
        };
        Duration::from_total_nanos(total_nanos)
    }

    /// The whole-second part of the span (negative for negative spans).
    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// The nanosecond remainder, 0..=999 999 999.
    pub fn subsec_nanos(self) -> u32 {
        self.nanos
    }

    /// Whether the span has zero length.
    pub fn is_zero(self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    /// Whether the span points backwards in time.
    pub fn is_negative(self) -> bool {
        self.seconds < 0
    }

    /// The span as total nanoseconds.
    pub fn total_nanos(self) -> i128 {
        self.seconds as i128 * NANOS_PER_SECOND + self.nanos as i128
    }

    fn from_total_nanos(total: i128) -> Result<Duration> {
        let seconds = total.div_euclid(NANOS_PER_SECOND);
        let nanos = total.rem_euclid(NANOS_PER_SECOND) as u32;
        let seconds = i64::try_from(seconds)
            .map_err(|_| TemporalError::Overflow("duration seconds out of range"))?;
        Ok(Duration { seconds, nanos })
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
