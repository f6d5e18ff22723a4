//! Per-range result cache.

use std::collections::HashMap;

use yuletide_calendar::YearRange;

use crate::occurrence::OccurrenceList;

/// Memoised query results keyed by range.
///
/// Results for a fixed range never change, so entries are never
/// invalidated; [`RangeCache::clear`] only frees memory.
#[derive(Debug, Clone, Default)]
pub struct RangeCache {
    entries: HashMap<YearRange, OccurrenceList>,
    hits: u64,
    misses: u64,
}

impl RangeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `range`, recording a hit or a miss.
    pub fn get(&mut self, range: YearRange) -> Option<&OccurrenceList> {
        match self.entries.get(&range) {
            Some(occ) => {
                self.hits += 1;
                Some(occ)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Stores the result for its range.
    pub fn insert(&mut self, occurrences: OccurrenceList) {
        self.entries.insert(occurrences.range(), occurrences);
    }

    /// Number of cached ranges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of successful lookups.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of failed lookups.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
