//! Wall-clock times within a single day.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TemporalError};

/// A time of day: hour, minute and second, with no date and no time zone.
///
/// Immutable and freely shareable; derived ordering runs from midnight
/// forward.
///
/// # Examples
///
/// ```
/// use tempora_core::Time;
///
/// let t = Time::of_hms(13, 45, 20)?;
/// assert_eq!(t.hour(), 13);
/// assert_eq!(t.to_string(), "13:45:20");
/// # Ok::<(), tempora_core::TemporalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Time {
    /// Creates a time from hour and minute; the second defaults to 0.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::InvalidTime`] if a field is out of range.
    pub fn of(hour: u8, minute: u8) -> Result<Time> {
        Time::of_hms(hour, minute, 0)
    }

    /// Creates a time from hour (0-23), minute (0-59) and second (0-59).
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::InvalidTime`] if a field is out of range.
    pub fn of_hms(hour: u8, minute: u8, second: u8) -> Result<Time> {
        if hour > 23 {
            return Err(TemporalError::InvalidTime(format!(
                "hour {hour} out of range 0-23"
            )));
        }
        if minute > 59 {
            return Err(TemporalError::InvalidTime(format!(
                "minute {minute} out of range 0-59"
            )));
        }
        if second > 59 {
            return Err(TemporalError::InvalidTime(format!(
                "second {second} out of range 0-59"
            )));
        }
        Ok(Time {
            hour,
            minute,
            second,
        })
    }

    /// Parses the canonical `HH:MM` or `HH:MM:SS` form.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::Parse`] on malformed or out-of-range input.
    pub fn parse(text: &str) -> Result<Time> {
        let mut parts = text.split(':');
        let (h, m, s) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), None, None) => (h, m, None),
            (Some(h), Some(m), Some(s), None) => (h, m, Some(s)),
            _ => return Err(malformed(text)),
        };
        if h.len() != 2 || m.len() != 2 || s.is_some_and(|s| s.len() != 2) {
            return Err(malformed(text));
        }
        let hour = parse_component(h, text)?;
        let minute = parse_component(m, text)?;
        let second = match s {
            Some(s) => parse_component(s, text)?,
            None => 0,
        };
        Time::of_hms(hour, minute, second)
            .map_err(|e| TemporalError::Parse(format!("'{text}': {e}")))
    }

    /// The hour of the day, 0-23.
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// The minute of the hour, 0-59.
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// The second of the minute, 0-59.
    pub fn second(self) -> u8 {
        self.second
    }

    /// Seconds since midnight, 0-86399. Drives duration computation.
    pub(crate) fn second_of_day(self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }
}

fn malformed(text: &str) -> TemporalError {
    TemporalError::Parse(format!("'{text}' does not match the HH:MM[:SS] pattern"))
}

fn parse_component(s: &str, whole: &str) -> Result<u8> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(whole));
    }
    s.parse().map_err(|_| malformed(whole))
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for Time {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Time> {
        Time::parse(s)
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
