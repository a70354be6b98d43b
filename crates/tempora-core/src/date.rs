//! Calendar dates on the proleptic Gregorian calendar.
//!
//! [`Date`] is an immutable year/month/day value with no time-of-day and no
//! time zone. Every constructor validates the full field combination up
//! front, so a `Date` that exists is always a real calendar day; every
//! "modification" returns a new value and leaves the original untouched.
//!
//! Internally dates convert to and from a signed count of days since
//! 1970-01-01 (the epoch day). That single conversion drives the day-of-week
//! derivation, whole-day distances, and the adjuster engine.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::adjust::Adjuster;
use crate::error::{Result, TemporalError};
use crate::field::DateField;
use crate::month::Month;
use crate::weekday::Weekday;

/// Days elapsed before the first of each month, in a non-leap year.
const CUMULATIVE_DAYS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A day on the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: year 0 exists, and negative years run
/// straight through it with no gap. Derived ordering is chronological.
///
/// # Examples
///
/// ```
/// use tempora_core::Date;
///
/// let date = Date::of(2019, 1, 21)?;
/// assert_eq!(date.year(), 2019);
/// assert_eq!(date.to_string(), "2019-01-21");
/// # Ok::<(), tempora_core::TemporalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a date from its year, month (1-12) and day-of-month fields.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::InvalidDate`] if the month is outside 1-12
    /// or the day is outside the actual length of that month in that year
    /// (February 29 only exists in leap years).
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora_core::Date;
    ///
    /// assert!(Date::of(2000, 2, 29).is_ok());
    /// assert!(Date::of(1900, 2, 29).is_err());
    /// ```
    pub fn of(year: i32, month: u8, day: u8) -> Result<Date> {
        let m = Month::from_number(month).ok_or_else(|| {
            TemporalError::InvalidDate(format!("month {month} out of range 1-12"))
        })?;
        let len = m.length(is_leap(year));
        if day == 0 || day > len {
            return Err(TemporalError::InvalidDate(format!(
                "day {day} out of range 1-{len} for {m} {year}"
            )));
        }
        Ok(Date { year, month, day })
    }

    /// Parses the canonical `YYYY-MM-DD` form.
    ///
    /// A leading `-` denotes a negative (astronomical) year; the year field
    /// is at least four digits, month and day exactly two.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::Parse`] if the text does not match the
    /// pattern or names a calendar-invalid date.
    pub fn parse(text: &str) -> Result<Date> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let mut parts = body.split('-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) => (y, m, d),
            _ => return Err(malformed(text)),
        };
        if y.len() < 4 || m.len() != 2 || d.len() != 2 {
            return Err(malformed(text));
        }
        let year: i32 = parse_digits(y, text)?;
        let year = if negative { -year } else { year };
        let month = parse_digits::<u8>(m, text)?;
        let day = parse_digits::<u8>(d, text)?;
        Date::of(year, month, day).map_err(|e| TemporalError::Parse(format!("'{text}': {e}")))
    }

    /// The proleptic-Gregorian year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The month number, 1-12.
    pub fn month(self) -> u8 {
        self.month
    }

    /// The month as a [`Month`].
    pub fn month_of_year(self) -> Month {
        // month is validated to 1-12 at construction
        Month::from_number(self.month).unwrap_or(Month::January)
    }

    /// The day of the month, 1-31.
    pub fn day(self) -> u8 {
        self.day
    }

    /// The ordinal day within the year, 1-366.
    pub fn day_of_year(self) -> u16 {
        let leap_shift = if self.month > 2 && is_leap(self.year) { 1 } else { 0 };
        CUMULATIVE_DAYS[(self.month - 1) as usize] + self.day as u16 + leap_shift
    }

    /// The day of the week, derived from the epoch-day count.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora_core::{Date, Weekday};
    ///
    /// assert_eq!(Date::of(2019, 1, 21)?.day_of_week(), Weekday::Monday);
    /// # Ok::<(), tempora_core::TemporalError>(())
    /// ```
    pub fn day_of_week(self) -> Weekday {
        // 1970-01-01 (epoch day 0) was a Thursday, three days past Monday.
        let days_from_monday = (self.to_epoch_day() + 3).rem_euclid(7) as u8;
        Weekday::from_days_from_monday(days_from_monday)
    }

    /// Whether this date's year is a Gregorian leap year: divisible by 4,
    /// and not by 100 unless also by 400.
    pub fn is_leap_year(self) -> bool {
        is_leap(self.year)
    }

    /// The number of days in this date's month, accounting for leap years.
    pub fn length_of_month(self) -> u8 {
        self.month_of_year().length(is_leap(self.year))
    }

    /// Returns a copy with the year replaced.
    ///
    /// # Errors
    ///
    /// The full result is re-validated: `with_year(2019)` on February 29
    /// fails with [`TemporalError::InvalidDate`] rather than clamping.
    pub fn with_year(self, year: i32) -> Result<Date> {
        Date::of(year, self.month, self.day)
    }

    /// Returns a copy with the month replaced, re-validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::InvalidDate`] if the day does not exist in
    /// the new month (January 31 → `with_month(2)` fails).
    pub fn with_month(self, month: u8) -> Result<Date> {
        Date::of(self.year, month, self.day)
    }

    /// Returns a copy with the day of the month replaced, re-validating the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::InvalidDate`] if the day is outside the
    /// month's actual length.
    pub fn with_day_of_month(self, day: u8) -> Result<Date> {
        Date::of(self.year, self.month, day)
    }

    /// Returns a copy positioned at the given ordinal day of the same year.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::InvalidDate`] if the ordinal is outside the
    /// year's length (366 only in leap years).
    pub fn with_day_of_year(self, day_of_year: u16) -> Result<Date> {
        let len: u16 = if is_leap(self.year) { 366 } else { 365 };
        if day_of_year == 0 || day_of_year > len {
            return Err(TemporalError::InvalidDate(format!(
                "day of year {day_of_year} out of range 1-{len} for year {y}",
                y = self.year
            )));
        }
        let jan1 = Date {
            year: self.year,
            month: 1,
            day: 1,
        };
        Ok(Date::from_epoch_day(
            jan1.to_epoch_day() + day_of_year as i64 - 1,
        ))
    }

    /// Reads one field through the closed [`DateField`] set.
    ///
    /// All five fields are readable on a date, so this accessor is total.
    pub fn get(self, field: DateField) -> i64 {
        match field {
            DateField::Year => self.year as i64,
            DateField::MonthOfYear => self.month as i64,
            DateField::DayOfMonth => self.day as i64,
            DateField::DayOfYear => self.day_of_year() as i64,
            DateField::DayOfWeek => self.day_of_week().number() as i64,
        }
    }

    /// Returns a copy with one field replaced through the closed
    /// [`DateField`] set, re-validating the whole result.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::InvalidDate`] when the value puts the date
    /// outside the calendar, and [`TemporalError::UnsupportedField`] for
    /// [`DateField::DayOfWeek`]: replacing the weekday is not a single-field
    /// substitution on this model (it would move the date within its week).
    pub fn with_field(self, field: DateField, value: i64) -> Result<Date> {
        match field {
            DateField::Year => {
                let year = i32::try_from(value).map_err(|_| {
                    TemporalError::InvalidDate(format!("year {value} out of range"))
                })?;
                self.with_year(year)
            }
            DateField::MonthOfYear => {
                let month = u8::try_from(value).map_err(|_| {
                    TemporalError::InvalidDate(format!("month {value} out of range 1-12"))
                })?;
                self.with_month(month)
            }
            DateField::DayOfMonth => {
                let day = u8::try_from(value).map_err(|_| {
                    TemporalError::InvalidDate(format!("day {value} out of range 1-31"))
                })?;
                self.with_day_of_month(day)
            }
            DateField::DayOfYear => {
                let doy = u16::try_from(value).map_err(|_| {
                    TemporalError::InvalidDate(format!("day of year {value} out of range 1-366"))
                })?;
                self.with_day_of_year(doy)
            }
            DateField::DayOfWeek => Err(TemporalError::UnsupportedField {
                field,
                operation: "with_field on a calendar date",
            }),
        }
    }

    /// Applies a named [`Adjuster`] and returns its result.
    ///
    /// Adjusters are total over valid dates and never mutate their input.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora_core::{Adjuster, Date, Weekday};
    ///
    /// let date = Date::of(2019, 1, 21)?; // a Monday
    /// let sunday = date.with(Adjuster::next_or_same(Weekday::Sunday));
    /// assert_eq!(sunday, Date::of(2019, 1, 27)?);
    /// # Ok::<(), tempora_core::TemporalError>(())
    /// ```
    pub fn with(self, adjuster: Adjuster) -> Date {
        adjuster.apply(self)
    }

    /// The signed number of whole days from `self` to `other`.
    ///
    /// Positive when `other` is later. This is the day-counting path for
    /// bare dates; second-resolution spans between dates are deliberately
    /// not a thing (see [`Duration::between`]).
    ///
    /// [`Duration::between`]: crate::Duration::between
    pub fn days_until(self, other: Date) -> i64 {
        other.to_epoch_day() - self.to_epoch_day()
    }

    /// Signed days since 1970-01-01.
    pub(crate) fn to_epoch_day(self) -> i64 {
        let y = self.year as i64 - if self.month <= 2 { 1 } else { 0 };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = self.month as i64;
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + self.day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Inverse of [`Date::to_epoch_day`].
    pub(crate) fn from_epoch_day(epoch_day: i64) -> Date {
        let z = epoch_day + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        Date {
            year: (y + if month <= 2 { 1 } else { 0 }) as i32,
            month,
            day,
        }
    }

    /// Constructs without validation. Callers guarantee the fields denote a
    /// real calendar date.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Date {
        Date { year, month, day }
    }
}

/// The Gregorian leap-year rule.
pub(crate) fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn malformed(text: &str) -> TemporalError {
    TemporalError::Parse(format!("'{text}' does not match the YYYY-MM-DD pattern"))
}

fn parse_digits<T: FromStr>(s: &str, whole: &str) -> Result<T> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(whole));
    }
    s.parse().map_err(|_| malformed(whole))
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(
                f,
                "-{:04}-{:02}-{:02}",
                self.year.unsigned_abs(),
                self.month,
                self.day
            )
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for Date {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Date> {
        Date::parse(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
