//! Lazy enumeration of Sunday-Christmas years.

use std::iter::FusedIterator;

use yuletide_calendar::{Year, YearRange, is_sunday_christmas};

/// Iterator yielding the Sunday-Christmas years of a range in ascending
/// order, evaluating one year per step.
///
/// # Example
///
/// ```
/// use yuletide_calendar::YearRange;
/// use yuletide_finder::SundayChristmases;
///
/// let range = YearRange::from_bounds(2000, 2030).unwrap();
/// let first = SundayChristmases::new(range).next().unwrap();
/// assert_eq!(first.get(), 2005);
/// ```
#[derive(Debug, Clone)]
pub struct SundayChristmases {
    /// Next year to evaluate; `None` once exhausted.
    next: Option<Year>,
    end: Year,
}

impl SundayChristmases {
    /// Creates an iterator over `range`.
    pub fn new(range: YearRange) -> Self {
        Self {
            next: Some(range.start()),
            end: range.end(),
        }
    }
}

impl Iterator for SundayChristmases {
    type Item = Year;

    fn next(&mut self) -> Option<Year> {
        while let Some(year) = self.next {
            self.next = year.checked_add(1).filter(|&y| y <= self.end);
            if is_sunday_christmas(year) {
                return Some(year);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(year) => (0, Some(usize::from(self.end.get() - year.get()) + 1)),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for SundayChristmases {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_in_order() {
        let range = YearRange::from_bounds(1970, 2017).unwrap();
        let years: Vec<u16> = SundayChristmases::new(range).map(Year::get).collect();
        assert_eq!(years, vec![1977, 1983, 1988, 1994, 2005, 2011, 2016]);
    }

    #[test]
    fn test_fused_after_end() {
        let range = YearRange::from_bounds(2022, 2022).unwrap();
        let mut it = SundayChristmases::new(range);
        assert_eq!(it.next().unwrap().get(), 2022);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_domain_end() {
        let range = YearRange::from_bounds(9980, 9999).unwrap();
        let years: Vec<u16> = SundayChristmases::new(range).map(Year::get).collect();
        assert_eq!(years, vec![9983, 9988, 9994]);
    }

    #[test]
    fn test_size_hint_upper_bound() {
        let range = YearRange::from_bounds(2000, 2009).unwrap();
        let it = SundayChristmases::new(range);
        assert_eq!(it.size_hint(), (0, Some(10)));
    }
}
