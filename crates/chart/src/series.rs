//! Chart series derived from an occurrence list and its analysis.

use yuletide_calendar::{Year, YearRange};
use yuletide_finder::OccurrenceList;
use yuletide_stats::Analysis;

/// Smallest moving-window size, one full weekday cycle.
pub const MIN_TREND_WINDOW: usize = 28;

/// One point of the moving-window frequency trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    /// Midpoint year of the window.
    pub centre: u16,
    /// Occurrences per year within the window, in percent.
    pub frequency_percentage: f64,
}

/// Everything needed to draw the four analysis panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Queried range.
    pub range_start: u16,
    /// Queried range.
    pub range_end: u16,
    /// Occurrence years for the timeline scatter.
    pub timeline: Vec<u16>,
    /// `(gap, count)` per distinct gap, ascending by gap.
    pub gap_histogram: Vec<(u16, usize)>,
    /// Mean gap marker, if there are gaps.
    pub average_gap: Option<f64>,
    /// `("2010s", count)` per decade, ascending.
    pub decade_bars: Vec<(String, usize)>,
    /// Window size used for [`ChartData::trend`], counted in occurrences.
    pub trend_window: usize,
    /// Moving-window frequency trend.
    pub trend: Vec<TrendPoint>,
}

impl ChartData {
    /// Builds all series.
    pub fn new(occurrences: &OccurrenceList, analysis: &Analysis) -> Self {
        let range: YearRange = occurrences.range();
        let years = occurrences.years();
        let trend_window = trend_window(years.len());
        Self {
            range_start: range.start().get(),
            range_end: range.end().get(),
            timeline: years.iter().map(|y| y.get()).collect(),
            gap_histogram: gap_histogram(&analysis.gaps),
            average_gap: analysis.gap_summary.as_ref().map(|s| s.average_gap),
            decade_bars: analysis
                .decades_distribution
                .iter()
                .map(|(&decade, &count)| (format!("{}s", u32::from(decade) * 10), count))
                .collect(),
            trend_window,
            trend: frequency_trend(years, trend_window),
        }
    }
}

/// Moving-window size for `count` occurrences: `max(28, count / 10)`.
pub fn trend_window(count: usize) -> usize {
    MIN_TREND_WINDOW.max(count / 10)
}

/// Count per distinct gap value, ascending by gap.
pub fn gap_histogram(gaps: &[u16]) -> Vec<(u16, usize)> {
    let mut sorted = gaps.to_vec();
    sorted.sort_unstable();
    let mut bins: Vec<(u16, usize)> = Vec::new();
    for g in sorted {
        match bins.last_mut() {
            Some((v, n)) if *v == g => *n += 1,
            _ => bins.push((g, 1)),
        }
    }
    bins
}

/// Moving-window frequency over `window` consecutive occurrences.
///
/// For each `i >= window`, the window spans `years[i - window]..=years[i]`
/// and the point is `window / span_years * 100` at the midpoint year.
/// Returns no points when there are not more than `window` occurrences.
pub fn frequency_trend(years: &[Year], window: usize) -> Vec<TrendPoint> {
    if window == 0 {
        return Vec::new();
    }
    (window..years.len())
        .map(|i| {
            let start = years[i - window].get();
            let end = years[i].get();
            let span = f64::from(end - start + 1);
            TrendPoint {
                centre: start + (end - start) / 2,
                frequency_percentage: window as f64 / span * 100.0,
            }
        })
        .collect()
}
