//! Gaps between consecutive occurrences.

use serde::Serialize;
use yuletide_calendar::Year;

use crate::{mean, round2};

/// Differences in years between consecutive entries of an ascending list.
///
/// Returns `n - 1` gaps for `n` years, or none for fewer than two years.
pub fn consecutive_gaps(years: &[Year]) -> Vec<u16> {
    years.windows(2).map(|w| w[1].get() - w[0].get()).collect()
}

/// Summary of the gaps between consecutive occurrences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapSummary {
    /// Mean gap, rounded to two decimals.
    pub average_gap: f64,
    /// Largest gap.
    pub max_gap: u16,
    /// Occurrences bounding the first largest gap.
    pub max_gap_years: (Year, Year),
    /// Most frequent gap; the earliest-seen value wins ties.
    pub most_common_gap: u16,
    /// Number of times [`GapSummary::most_common_gap`] occurs.
    pub most_common_gap_frequency: usize,
}

impl GapSummary {
    /// Summarises the gaps of an ascending year list.
    ///
    /// Returns `None` for fewer than two years.
    pub fn from_years(years: &[Year]) -> Option<Self> {
        let gaps = consecutive_gaps(years);
        let (max_index, &max_gap) = first_max(&gaps)?;
        let (most_common_gap, most_common_gap_frequency) = most_common(&gaps)?;
        let as_f64: Vec<f64> = gaps.iter().map(|&g| f64::from(g)).collect();

        Some(Self {
            average_gap: round2(mean(&as_f64)),
            max_gap,
            max_gap_years: (years[max_index], years[max_index + 1]),
            most_common_gap,
            most_common_gap_frequency,
        })
    }
}

/// Index and value of the first maximum.
fn first_max(gaps: &[u16]) -> Option<(usize, &u16)> {
    let mut best: Option<(usize, &u16)> = None;
    for (i, g) in gaps.iter().enumerate() {
        if best.is_none_or(|(_, b)| g > b) {
            best = Some((i, g));
        }
    }
    best
}

/// Most frequent value and its count, ties broken by first appearance.
fn most_common(gaps: &[u16]) -> Option<(u16, usize)> {
    // (value, count) in order of first appearance
    let mut counts: Vec<(u16, usize)> = Vec::new();
    for &g in gaps {
        match counts.iter_mut().find(|(v, _)| *v == g) {
            Some((_, n)) => *n += 1,
            None => counts.push((g, 1)),
        }
    }
    let mut best: Option<(u16, usize)> = None;
    for (v, n) in counts {
        if best.is_none_or(|(_, b)| n > b) {
            best = Some((v, n));
        }
    }
    best
}
