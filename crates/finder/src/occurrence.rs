//! Output type for Sunday-Christmas queries.

use yuletide_calendar::{Year, YearRange};

/// Ascending, duplicate-free list of years whose December 25 is a Sunday,
/// together with the range it was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceList {
    range: YearRange,
    years: Vec<Year>,
}

impl OccurrenceList {
    /// Creates a new `OccurrenceList`.
    ///
    /// `years` must be strictly ascending and lie within `range`.
    pub(crate) fn new(range: YearRange, years: Vec<Year>) -> Self {
        debug_assert!(years.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(years.iter().all(|&y| range.contains(y)));
        Self { range, years }
    }

    /// Returns the queried range.
    pub fn range(&self) -> YearRange {
        self.range
    }

    /// Returns the occurrences in ascending order.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Number of occurrences.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Returns `true` if the range holds no occurrence.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Earliest occurrence.
    pub fn first(&self) -> Option<Year> {
        self.years.first().copied()
    }

    /// Latest occurrence.
    pub fn last(&self) -> Option<Year> {
        self.years.last().copied()
    }

    /// Returns `true` if `year` is an occurrence.
    pub fn contains(&self, year: Year) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    /// First occurrence at or after `year`.
    pub fn next_from(&self, year: u16) -> Option<Year> {
        let idx = self.years.partition_point(|y| y.get() < year);
        self.years.get(idx).copied()
    }

    /// Iterates over the occurrences.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Year> + '_ {
        self.years.iter().copied()
    }
}
