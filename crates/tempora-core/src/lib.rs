//! # tempora-core
//!
//! Immutable temporal values and the arithmetic between them.
//!
//! Four value kinds model points in time at different resolutions: a
//! calendar day, a wall-clock time, their composition, and a machine
//! timestamp. Every value is validated at construction and never mutated
//! afterwards ("modification" always returns a new value), so values are
//! freely shareable across threads with no synchronization. No function
//! here reads the system clock; callers supply every temporal input, which
//! keeps the whole crate deterministic and testable.
//!
//! ## Modules
//!
//! - [`date`] — [`Date`]: a day on the proleptic Gregorian calendar
//! - [`time`] — [`Time`]: a wall-clock time within one day
//! - [`datetime`] — [`DateTime`]: a `Date` combined with a `Time`
//! - [`instant`] — [`Instant`]: seconds since the epoch plus a nanosecond remainder
//! - [`duration`] — [`Duration::between`] over same-kind operands
//! - [`adjust`] — named [`Adjuster`] transformations over dates
//! - [`field`] — the closed [`DateField`] set for generic field access
//! - [`weekday`] / [`month`] — calendar enumerations
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use tempora_core::{Adjuster, Date, Duration, Time};
//!
//! let date = Date::parse("2019-01-21")?;
//! let payday = date.with(Adjuster::last_day_of_month());
//! assert_eq!(payday.to_string(), "2019-01-31");
//!
//! let span = Duration::between(Time::of(9, 0)?, Time::of(17, 30)?)?;
//! assert_eq!(span.seconds(), 8 * 3600 + 30 * 60);
//! # Ok::<(), tempora_core::TemporalError>(())
//! ```

pub mod adjust;
pub mod date;
pub mod datetime;
pub mod duration;
pub mod error;
pub mod field;
pub mod instant;
pub mod month;
pub mod time;
pub mod weekday;

pub use adjust::Adjuster;
pub use date::Date;
pub use datetime::DateTime;
pub use duration::{Duration, Temporal, TemporalKind};
pub use error::{Result, TemporalError};
pub use field::DateField;
pub use instant::Instant;
pub use month::Month;
pub use time::Time;
pub use weekday::Weekday;
