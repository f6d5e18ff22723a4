//! Year newtype and inclusive year ranges.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::CalendarError;

/// Smallest supported year.
pub const MIN_YEAR: u16 = 1;

/// Largest supported year.
pub const MAX_YEAR: u16 = 9999;

/// A calendar year in the proleptic Gregorian calendar (1..=9999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Year(u16);

impl Year {
    /// Creates a new `Year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfDomain`] if `year` is not in 1..=9999.
    pub fn new(year: i64) -> Result<Self, CalendarError> {
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
            return Err(CalendarError::OutOfDomain { year });
        }
        Ok(Self(year as u16))
    }

    /// Returns the inner year value.
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns `true` if this is a Gregorian leap year.
    pub fn is_leap(self) -> bool {
        crate::is_leap_year(self.0)
    }

    /// Returns `true` for century years that are not leap years
    /// (1700, 1800, 1900, 2100, ...).
    pub fn is_common_century(self) -> bool {
        self.0 % 100 == 0 && self.0 % 400 != 0
    }

    /// Decade key: the year integer-divided by 10.
    pub fn decade(self) -> u16 {
        self.0 / 10
    }

    /// Century key: the year integer-divided by 100.
    pub fn century(self) -> u16 {
        self.0 / 100
    }

    /// Returns the year `n` years later, or `None` past the domain.
    pub fn checked_add(self, n: u16) -> Option<Self> {
        self.0
            .checked_add(n)
            .filter(|&y| y <= MAX_YEAR)
            .map(Self)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive range of years with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: Year,
    end: Year,
}

impl YearRange {
    /// Creates a range from two validated years.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `start > end`.
    pub fn new(start: Year, end: Year) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange {
                start: start.get().into(),
                end: end.get().into(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from raw integers.
    ///
    /// Ordering is checked before the domain, so `(2030, 2000)` is an
    /// [`CalendarError::InvalidRange`] and `(0, 10)` is
    /// [`CalendarError::OutOfDomain`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `start > end`, or
    /// [`CalendarError::OutOfDomain`] if either bound is outside 1..=9999.
    pub fn from_bounds(start: i64, end: i64) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Self::new(Year::new(start)?, Year::new(end)?)
    }

    /// Returns the first year of the range.
    pub fn start(self) -> Year {
        self.start
    }

    /// Returns the last year of the range.
    pub fn end(self) -> Year {
        self.end
    }

    /// Number of years in the range (always at least 1).
    pub fn len(self) -> usize {
        usize::from(self.end.get() - self.start.get()) + 1
    }

    /// Always `false`: a valid range holds at least one year.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Returns `true` if `year` lies within the range.
    pub fn contains(self, year: Year) -> bool {
        self.start <= year && year <= self.end
    }

    /// Iterates over every year of the range in ascending order.
    pub fn years(self) -> impl DoubleEndedIterator<Item = Year> + ExactSizeIterator {
        self.as_u16_range().map(Year)
    }

    /// Splits the range so that `at` starts the second half.
    ///
    /// Returns `None` unless `start < at <= end`.
    pub fn split_at(self, at: Year) -> Option<(Self, Self)> {
        if at <= self.start || at > self.end {
            return None;
        }
        let before = Self {
            start: self.start,
            end: Year(at.get() - 1),
        };
        let after = Self {
            start: at,
            end: self.end,
        };
        Some((before, after))
    }

    /// Returns the bounds as a raw integer range.
    pub fn as_u16_range(self) -> RangeInclusive<u16> {
        self.start.get()..=self.end.get()
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
