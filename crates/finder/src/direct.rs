//! Direct enumeration: evaluate the weekday rule for every year.

use yuletide_calendar::{Year, YearRange, is_sunday_christmas};

use crate::occurrence::OccurrenceList;

/// Returns every year of `range` whose December 25 is a Sunday.
///
/// This is the reference method the other strategies are checked against.
pub fn find_direct(range: YearRange) -> OccurrenceList {
    OccurrenceList::new(range, sunday_years(range))
}

/// Sunday-Christmas years of `range`, evaluating each year.
pub(crate) fn sunday_years(range: YearRange) -> Vec<Year> {
    range.years().filter(|&y| is_sunday_christmas(y)).collect()
}
