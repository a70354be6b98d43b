//! Months of the year.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A month of the year, January through December (numbered 1-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Looks up a month by its calendar number (1 = January .. 12 = December).
    pub fn from_number(n: u8) -> Option<Month> {
        match n {
            1..=12 => Some(Self::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    /// The calendar number of this month (1 = January .. 12 = December).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// The length of this month in days, given whether the year is a leap
    /// year. February is 29 in a leap year and 28 otherwise; April, June,
    /// September and November are 30; every other month is 31.
    pub fn length(self, leap: bool) -> u8 {
        match self {
            Month::February => {
                if leap {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        };
        f.write_str(name)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
