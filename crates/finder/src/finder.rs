//! Calculator entry point combining method selection and caching.

use tracing::{debug, info_span};
use yuletide_calendar::YearRange;

use crate::cache::RangeCache;
use crate::config::{FinderConfig, Method};
use crate::cycle::find_optimized;
use crate::direct::find_direct;
use crate::error::FinderError;
use crate::lazy::SundayChristmases;
use crate::occurrence::OccurrenceList;

/// Sunday-Christmas calculator.
///
/// Owns its cache, so independent instances never share results.
///
/// # Example
///
/// ```
/// use yuletide_finder::{Finder, FinderConfig};
///
/// let mut finder = Finder::new(FinderConfig::default());
/// let occ = finder.find_years(1970, 2017).unwrap();
/// let years: Vec<u16> = occ.iter().map(|y| y.get()).collect();
/// assert_eq!(years, vec![1977, 1983, 1988, 1994, 2005, 2011, 2016]);
/// ```
#[derive(Debug, Clone)]
pub struct Finder {
    config: FinderConfig,
    cache: Option<RangeCache>,
}

impl Finder {
    /// Creates a calculator from `config`.
    pub fn new(config: FinderConfig) -> Self {
        let cache = config.cache().then(RangeCache::new);
        Self { config, cache }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Returns the cache, if enabled.
    pub fn cache(&self) -> Option<&RangeCache> {
        self.cache.as_ref()
    }

    /// Empties the cache, if enabled.
    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }

    /// Validates raw bounds and runs the configured method.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Calendar`] wrapping
    /// [`CalendarError::InvalidRange`](yuletide_calendar::CalendarError::InvalidRange)
    /// if `start > end`, or
    /// [`CalendarError::OutOfDomain`](yuletide_calendar::CalendarError::OutOfDomain)
    /// if a bound lies outside 1..=9999.
    pub fn find_years(&mut self, start: i64, end: i64) -> Result<OccurrenceList, FinderError> {
        let range = YearRange::from_bounds(start, end)?;
        Ok(self.find(range))
    }

    /// Runs the configured method over `range`.
    pub fn find(&mut self, range: YearRange) -> OccurrenceList {
        self.find_with(range, self.config.method())
    }

    /// Runs `method` over `range`, consulting the cache first.
    pub fn find_with(&mut self, range: YearRange, method: Method) -> OccurrenceList {
        let _span = info_span!("find", range = %range, method = %method).entered();
        if let Some(hit) = self.cache.as_mut().and_then(|c| c.get(range)) {
            debug!(occurrences = hit.len(), "cache hit");
            return hit.clone();
        }

        let occurrences = compute(range, method);
        debug!(occurrences = occurrences.len(), "computed");

        if let Some(cache) = self.cache.as_mut() {
            cache.insert(occurrences.clone());
        }
        occurrences
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new(FinderConfig::default())
    }
}

/// Runs `method` over `range` without caching.
pub fn compute(range: YearRange, method: Method) -> OccurrenceList {
    match method {
        Method::Direct => find_direct(range),
        Method::Optimized => find_optimized(range),
        Method::Lazy => OccurrenceList::new(range, SundayChristmases::new(range).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuletide_calendar::CalendarError;

    #[test]
    fn test_invalid_range() {
        let mut finder = Finder::default();
        assert_eq!(
            finder.find_years(2030, 2000).unwrap_err(),
            FinderError::Calendar(CalendarError::InvalidRange {
                start: 2030,
                end: 2000
            })
        );
    }

    #[test]
    fn test_out_of_domain() {
        let mut finder = Finder::default();
        assert_eq!(
            finder.find_years(0, 100).unwrap_err(),
            FinderError::Calendar(CalendarError::OutOfDomain { year: 0 })
        );
        assert_eq!(
            finder.find_years(9000, 10_000).unwrap_err(),
            FinderError::Calendar(CalendarError::OutOfDomain { year: 10_000 })
        );
    }

    #[test]
    fn test_cache_is_used() {
        let mut finder = Finder::default();
        let a = finder.find_years(2000, 2100).unwrap();
        let b = finder.find_years(2000, 2100).unwrap();
        assert_eq!(a, b);
        let cache = finder.cache().unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_cache_disabled() {
        let mut finder = Finder::new(FinderConfig::new().with_cache(false));
        finder.find_years(2000, 2100).unwrap();
        assert!(finder.cache().is_none());
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = Finder::default();
        let b = Finder::default();
        a.find_years(2000, 2100).unwrap();
        assert_eq!(a.cache().unwrap().len(), 1);
        assert_eq!(b.cache().unwrap().len(), 0);
    }

    #[test]
    fn test_clear_cache() {
        let mut finder = Finder::default();
        finder.find_years(2000, 2100).unwrap();
        finder.clear_cache();
        assert!(finder.cache().unwrap().is_empty());
    }
}
