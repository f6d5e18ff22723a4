//! Full statistical summary of an occurrence list.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;
use yuletide_calendar::Year;
use yuletide_finder::OccurrenceList;

use crate::error::StatsError;
use crate::gaps::{GapSummary, consecutive_gaps};
use crate::round2;

/// Statistics over the Sunday-Christmas years of one range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Number of occurrences.
    pub total_sunday_christmases: usize,
    /// Number of years in the queried range.
    pub total_years: usize,
    /// Occurrences per year of the range, as a percentage rounded to two
    /// decimals.
    pub frequency_percentage: f64,
    /// Gaps between consecutive occurrences.
    pub gaps: Vec<u16>,
    /// Gap summary; `None` with a single occurrence.
    pub gap_summary: Option<GapSummary>,
    /// Occurrence count per decade key (`year / 10`).
    pub decades_distribution: BTreeMap<u16, usize>,
    /// Occurrence count per century key (`year / 100`).
    pub centuries_distribution: BTreeMap<u16, usize>,
    /// Earliest occurrence.
    pub first_occurrence: Year,
    /// Latest occurrence.
    pub last_occurrence: Year,
    /// Year the next occurrence is searched from.
    pub reference_year: u16,
    /// First occurrence at or after [`Analysis::reference_year`].
    pub next_occurrence: Option<Year>,
}

/// Computes the statistical summary of `occurrences`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyResult`] if `occurrences` is empty.
pub fn analyze(
    occurrences: &OccurrenceList,
    reference_year: u16,
) -> Result<Analysis, StatsError> {
    let range = occurrences.range();
    let (Some(first_occurrence), Some(last_occurrence)) = (occurrences.first(), occurrences.last())
    else {
        return Err(StatsError::EmptyResult {
            start: range.start().get(),
            end: range.end().get(),
        });
    };

    let years = occurrences.years();
    let total_years = range.len();
    let frequency = years.len() as f64 / total_years as f64;

    let analysis = Analysis {
        total_sunday_christmases: years.len(),
        total_years,
        frequency_percentage: round2(frequency * 100.0),
        gaps: consecutive_gaps(years),
        gap_summary: GapSummary::from_years(years),
        decades_distribution: distribution(years, Year::decade),
        centuries_distribution: distribution(years, Year::century),
        first_occurrence,
        last_occurrence,
        reference_year,
        next_occurrence: occurrences.next_from(reference_year),
    };
    debug!(
        range = %range,
        occurrences = analysis.total_sunday_christmases,
        frequency_percentage = analysis.frequency_percentage,
        "analysis complete"
    );
    Ok(analysis)
}

/// Counts years per grouping key.
pub fn distribution(years: &[Year], key: impl Fn(Year) -> u16) -> BTreeMap<u16, usize> {
    let mut counts = BTreeMap::new();
    for &year in years {
        *counts.entry(key(year)).or_insert(0) += 1;
    }
    counts
}
