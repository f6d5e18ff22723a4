//! Error types for the yuletide-calendar crate.

use crate::year::{MAX_YEAR, MIN_YEAR};

/// Error type for all fallible operations in the yuletide-calendar crate.
///
/// Covers the supported year domain, range ordering, and month/day
/// validation in the proleptic Gregorian calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a year lies outside the supported domain.
    #[error("year {year} is out of domain (must be {MIN_YEAR}..={MAX_YEAR})")]
    OutOfDomain {
        /// The offending year value.
        year: i64,
    },

    /// Returned when a range has its start after its end.
    #[error("invalid range: start year {start} is after end year {end}")]
    InvalidRange {
        /// Requested first year.
        start: i64,
        /// Requested last year.
        end: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides the length of February.
        year: u16,
        /// The maximum valid day for the given month.
        max_day: u8,
    },
}
