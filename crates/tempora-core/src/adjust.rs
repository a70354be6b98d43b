//! Named date adjusters.
//!
//! An adjuster is a named pure function from one [`Date`] to another,
//! applied through [`Date::with`]. Adjusters are total over valid dates:
//! they never fail and never mutate their input.

use crate::date::Date;
use crate::weekday::Weekday;

/// The closed set of built-in date transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjuster {
    /// The next occurrence of a weekday, counting the input date itself.
    NextOrSame(Weekday),
    /// The final day of the input date's month.
    LastDayOfMonth,
}

impl Adjuster {
    /// Adjusts to the next date falling on `weekday`, returning the input
    /// unchanged when it already does (advances 1-6 days otherwise).
    pub fn next_or_same(weekday: Weekday) -> Adjuster {
        Adjuster::NextOrSame(weekday)
    }

    /// Adjusts to the last day of the month, keeping year and month.
    pub fn last_day_of_month() -> Adjuster {
        Adjuster::LastDayOfMonth
    }

    /// Applies this adjuster to a date and returns the transformed copy.
    pub fn apply(self, date: Date) -> Date {
        match self {
            Adjuster::NextOrSame(target) => {
                let ahead = date.day_of_week().days_until(target);
                if ahead == 0 {
                    date
                } else {
                    Date::from_epoch_day(date.to_epoch_day() + ahead as i64)
                }
            }
            // day = length of month is valid by definition
            Adjuster::LastDayOfMonth => {
                Date::new_unchecked(date.year(), date.month(), date.length_of_month())
            }
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
