//! Proleptic Gregorian date and the day-of-week rule.

use std::fmt;

use crate::doy::{MONTH_START_DOY, day_of_year, days_before_year};
use crate::error::CalendarError;
use crate::weekday::Weekday;
use crate::year::Year;

/// Month of Christmas Day.
pub const CHRISTMAS_MONTH: u8 = 12;

/// Day-of-month of Christmas Day.
pub const CHRISTMAS_DAY: u8 = 25;

/// A validated date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: Year,
    month: u8,
    day: u8,
    ordinal: u16,
}

impl GregorianDate {
    /// Creates a new `GregorianDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is invalid for `year`.
    pub fn new(year: Year, month: u8, day: u8) -> Result<Self, CalendarError> {
        let ordinal = day_of_year(year.get(), month, day)?;
        Ok(Self {
            year,
            month,
            day,
            ordinal,
        })
    }

    /// December 25 of `year`.
    pub fn christmas(year: Year) -> Self {
        let common_ordinal =
            MONTH_START_DOY[CHRISTMAS_MONTH as usize] + u16::from(CHRISTMAS_DAY) - 1;
        Self {
            year,
            month: CHRISTMAS_MONTH,
            day: CHRISTMAS_DAY,
            ordinal: common_ordinal + u16::from(year.is_leap()),
        }
    }

    /// Returns the year.
    pub fn year(self) -> Year {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 1-based day-of-year.
    pub fn ordinal(self) -> u16 {
        self.ordinal
    }

    /// Days elapsed since 0001-01-01.
    pub fn days_since_epoch(self) -> u64 {
        days_before_year(self.year.get()) + u64::from(self.ordinal()) - 1
    }

    /// Returns the day of the week. 0001-01-01 is a Monday.
    pub fn weekday(self) -> Weekday {
        Weekday::from_index(self.days_since_epoch())
    }
}

impl fmt::Display for GregorianDate {
    /// ISO-8601 `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year.get(), self.month, self.day)
    }
}

/// Weekday of an arbitrary `(year, month, day)`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the year is out of domain or the month/day
/// are invalid.
pub fn weekday(year: i64, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    Ok(GregorianDate::new(Year::new(year)?, month, day)?.weekday())
}

/// Weekday of December 25 of `year`.
pub fn christmas_weekday(year: Year) -> Weekday {
    GregorianDate::christmas(year).weekday()
}

/// Returns `true` if December 25 of `year` is a Sunday.
pub fn is_sunday_christmas(year: Year) -> bool {
    christmas_weekday(year) == Weekday::Sunday
}
