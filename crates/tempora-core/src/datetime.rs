//! Combined calendar date and wall-clock time.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;
use crate::error::{Result, TemporalError};
use crate::time::Time;
use crate::weekday::Weekday;

/// A [`Date`] combined with a [`Time`]: a point on the calendar at
/// second resolution, with no time zone.
///
/// A composition, not a new kind of validation: every constraint is
/// enforced by the parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Creates a date-time directly from its six fields.
    ///
    /// # Errors
    ///
    /// Fails exactly where [`Date::of`] or [`Time::of_hms`] would.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora_core::DateTime;
    ///
    /// let dt = DateTime::of(2019, 3, 18, 13, 45, 30)?;
    /// assert_eq!(dt.to_string(), "2019-03-18T13:45:30");
    /// # Ok::<(), tempora_core::TemporalError>(())
    /// ```
    pub fn of(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<DateTime> {
        Ok(DateTime {
            date: Date::of(year, month, day)?,
            time: Time::of_hms(hour, minute, second)?,
        })
    }

    /// Composes an existing date and time. Infallible: both parts are
    /// already valid.
    pub fn from_parts(date: Date, time: Time) -> DateTime {
        DateTime { date, time }
    }

    /// Parses the canonical `YYYY-MM-DDTHH:MM[:SS]` form.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::Parse`] when the `T` separator is missing
    /// or either side fails its own grammar.
    pub fn parse(text: &str) -> Result<DateTime> {
        let (date_part, time_part) = text.split_once('T').ok_or_else(|| {
            TemporalError::Parse(format!(
                "'{text}' does not match the YYYY-MM-DDTHH:MM[:SS] pattern"
            ))
        })?;
        Ok(DateTime {
            date: Date::parse(date_part)?,
            time: Time::parse(time_part)?,
        })
    }

    /// The date component.
    pub fn date(self) -> Date {
        self.date
    }

    /// The time component.
    pub fn time(self) -> Time {
        self.time
    }

    /// The year, delegated to the date component.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// The month number, 1-12.
    pub fn month(self) -> u8 {
        self.date.month()
    }

    /// The day of the month.
    pub fn day(self) -> u8 {
        self.date.day()
    }

    /// The day of the week of the date component.
    pub fn day_of_week(self) -> Weekday {
        self.date.day_of_week()
    }

    /// The hour of the day.
    pub fn hour(self) -> u8 {
        self.time.hour()
    }

    /// The minute of the hour.
    pub fn minute(self) -> u8 {
        self.time.minute()
    }

    /// The second of the minute.
    pub fn second(self) -> u8 {
        self.time.second()
    }

    /// Seconds since the epoch on an idealized 86 400-second-day timeline.
    ///
    /// Duration math only. This is not a calendar-to-instant bridge:
    /// `DateTime` and [`Instant`](crate::Instant) stay distinct kinds.
    pub(crate) fn epoch_second(self) -> i64 {
        self.date.to_epoch_day() * 86_400 + self.time.second_of_day() as i64
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<DateTime> {
        DateTime::parse(s)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_direct_construction() {
        let dt = DateTime::of(2019, 3, 18, 13, 45, 30).unwrap();
        assert_eq!(dt.year(), 2019);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 18);
        assert_eq!(dt.hour(), 13);
        assert_eq!(dt.minute(), 45);
        assert_eq!(dt.second(), 30);
    }

    #[test]
    fn test_of_delegates_validation_to_parts() {
        assert!(DateTime::of(2019, 2, 29, 0, 0, 0).is_err());
        assert!(DateTime::of(2019, 1, 21, 24, 0, 0).is_err());
    }

    #[test]
    fn test_from_parts_equals_direct() {
        let date = Date::parse("2019-01-21").unwrap();
        let time = Time::parse("13:45:30").unwrap();
        let composed = DateTime::from_parts(date, time);
        assert_eq!(composed, DateTime::of(2019, 1, 21, 13, 45, 30).unwrap());
        assert_eq!(composed.date(), date);
        assert_eq!(composed.time(), time);
    }

    #[test]
    fn test_parse_canonical() {
        let dt = DateTime::parse("2019-03-18T13:45:30").unwrap();
        assert_eq!(dt, DateTime::of(2019, 3, 18, 13, 45, 30).unwrap());
        // Seconds may be omitted.
        let short = DateTime::parse("2019-03-18T13:45").unwrap();
        assert_eq!(short.second(), 0);
    }

    #[test]
    fn test_parse_requires_t_separator() {
        for text in ["2019-03-18 13:45:30", "2019-03-18", "13:45:30", ""] {
            let err = DateTime::parse(text).unwrap_err();
            assert!(matches!(err, TemporalError::Parse(_)), "'{text}' got: {err}");
        }
    }

    #[test]
    fn test_day_of_week_delegates() {
        let dt = DateTime::of(2019, 1, 21, 9, 0, 0).unwrap();
        assert_eq!(dt.day_of_week(), Weekday::Monday);
    }

    #[test]
    fn test_epoch_second() {
        assert_eq!(DateTime::of(1970, 1, 1, 0, 0, 0).unwrap().epoch_second(), 0);
        assert_eq!(DateTime::of(1970, 1, 2, 0, 0, 1).unwrap().epoch_second(), 86_401);
        assert_eq!(DateTime::of(1969, 12, 31, 23, 59, 59).unwrap().epoch_second(), -1);
    }

    #[test]
    fn test_display_round_trip() {
        let dt = DateTime::of(2019, 3, 18, 13, 45, 30).unwrap();
        assert_eq!(DateTime::parse(&dt.to_string()).unwrap(), dt);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let morning = DateTime::of(2019, 1, 21, 9, 0, 0).unwrap();
        let evening = DateTime::of(2019, 1, 21, 18, 0, 0).unwrap();
        let next_day = DateTime::of(2019, 1, 22, 0, 0, 0).unwrap();
        assert!(morning < evening);
        assert!(evening < next_day);
    }

    #[test]
    fn test_serde_uses_canonical_text() {
        let dt = DateTime::of(2019, 3, 18, 13, 45, 30).unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2019-03-18T13:45:30\"");
        assert_eq!(serde_json::from_str::<DateTime>(&json).unwrap(), dt);
    }
}
