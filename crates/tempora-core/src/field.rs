//! Enumerated field identifiers for generic date access.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of fields addressable through [`Date::get`] and
/// [`Date::with_field`].
///
/// Dispatch over this set is a plain `match`; the set is fixed at design
/// time and never extended at runtime.
///
/// [`Date::get`]: crate::Date::get
/// [`Date::with_field`]: crate::Date::with_field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateField {
    /// The proleptic-Gregorian year.
    Year,
    /// The month within the year (1-12).
    MonthOfYear,
    /// The day within the month (1-31).
    DayOfMonth,
    /// The ordinal day within the year (1-366).
    DayOfYear,
    /// The day of the week (1 = Monday .. 7 = Sunday).
    DayOfWeek,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateField::Year => "YEAR",
            DateField::MonthOfYear => "MONTH_OF_YEAR",
            DateField::DayOfMonth => "DAY_OF_MONTH",
            DateField::DayOfYear => "DAY_OF_YEAR",
            DateField::DayOfWeek => "DAY_OF_WEEK",
        };
        f.write_str(name)
    }
}
