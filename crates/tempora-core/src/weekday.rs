//! Days of the week.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A day of the week, Monday through Sunday.
///
/// Numbering follows ISO 8601: Monday is 1, Sunday is 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Looks up a weekday by its ISO number (1 = Monday .. 7 = Sunday).
    pub fn from_number(n: u8) -> Option<Weekday> {
        match n {
            1..=7 => Some(Self::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    /// The ISO number of this weekday (1 = Monday .. 7 = Sunday).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// How many days forward from `self` to the next occurrence of `other`,
    /// in 0..=6. Zero when the weekdays are equal.
    pub fn days_until(self, other: Weekday) -> u8 {
        (other as i8 - self as i8).rem_euclid(7) as u8
    }

    /// Weekday from a count of days since Monday (0 = Monday .. 6 = Sunday).
    pub(crate) fn from_days_from_monday(d: u8) -> Weekday {
        Self::ALL[(d % 7) as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
