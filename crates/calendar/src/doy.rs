//! Day-of-year tables and leap-year rule for the proleptic Gregorian calendar.

use crate::error::CalendarError;

/// Number of days in each month of a common year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in a common year
/// (index 0 unused, index 1 = January starts at DOY 1, ...).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Returns `true` if `year` is a leap year.
///
/// A year is a leap year if it is divisible by 4, except century years,
/// which are leap years only if also divisible by 400.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: u16, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// Returns the 1-based day-of-year for a `(month, day)` pair in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
/// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the given month.
pub fn day_of_year(year: u16, month: u8, day: u8) -> Result<u16, CalendarError> {
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            year,
            max_day,
        });
    }
    let leap_shift = u16::from(month > 2 && is_leap_year(year));
    Ok(MONTH_START_DOY[month as usize] + u16::from(day) - 1 + leap_shift)
}

/// Number of days from 0001-01-01 up to (not including) January 1 of `year`.
///
/// `year` must be at least 1.
pub fn days_before_year(year: u16) -> u64 {
    let y = u64::from(year) - 1;
    365 * y + y / 4 - y / 100 + y / 400
}
