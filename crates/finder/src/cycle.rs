//! 28-year cycle shortcut.
//!
//! From one Christmas to the next the weekday advances by one day, or by
//! two when the later year is a leap year. Twenty-eight consecutive years
//! normally hold seven leap years, a whole number of weeks, so the set of
//! Sunday-Christmas offsets repeats every 28 years. A century year that is
//! not divisible by 400 drops one leap day and shifts the pattern, so the
//! shortcut is only applied inside *stable stretches* that contain no such
//! year past their first.
//!
//! ```text
//! range ──split at every common century──▶ stretches
//!   stretch < 28 years or unstable ─▶ direct evaluation
//!   stretch >= 28 years            ─▶ signature (first 28 years, exact)
//!                                     replicate across later cycles
//!                                     verify every replicated year
//!                                     any mismatch ─▶ direct evaluation
//! ```

use tracing::{debug, warn};
use yuletide_calendar::{Year, YearRange, is_sunday_christmas};

use crate::direct;
use crate::occurrence::OccurrenceList;

/// Length of the weekday cycle between common centuries.
pub const CYCLE_YEARS: u16 = 28;

/// Work done by one optimized query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Number of stable stretches the range was split into.
    pub stretches: usize,
    /// Stretches answered by replicating a signature.
    pub replicated: usize,
    /// Stretches that fell back to direct evaluation after a failed check.
    pub fallbacks: usize,
    /// Day-of-week evaluations performed.
    pub evaluations: usize,
}

/// Returns every year of `range` whose December 25 is a Sunday, using the
/// 28-year cycle where it is valid.
///
/// The output is identical to [`find_direct`](crate::find_direct).
pub fn find_optimized(range: YearRange) -> OccurrenceList {
    find_optimized_with_report(range).0
}

/// Like [`find_optimized`], also returning a [`CycleReport`].
pub fn find_optimized_with_report(range: YearRange) -> (OccurrenceList, CycleReport) {
    let mut report = CycleReport::default();
    let mut years = Vec::with_capacity(range.len() / 6 + 1);

    for stretch in stable_stretches(range) {
        report.stretches += 1;
        evaluate_stretch(stretch, &mut report, &mut years);
    }

    debug!(
        range = %range,
        occurrences = years.len(),
        stretches = report.stretches,
        replicated = report.replicated,
        fallbacks = report.fallbacks,
        evaluations = report.evaluations,
        "optimized enumeration complete"
    );
    (OccurrenceList::new(range, years), report)
}

/// Century years in `range` that are not leap years, ascending.
pub fn common_centuries(range: YearRange) -> impl Iterator<Item = Year> {
    let first = range.start().get().div_ceil(100) * 100;
    (first..=range.end().get())
        .step_by(100)
        .filter(|c| c % 400 != 0)
        .filter_map(|c| Year::new(i64::from(c)).ok())
}

/// Splits `range` at every common century it contains past its first year.
///
/// Inside each returned stretch, `y` and `y + 28` always share the weekday
/// of their Christmas.
pub fn stable_stretches(range: YearRange) -> Vec<YearRange> {
    let mut stretches = Vec::new();
    let mut rest = range;
    for century in common_centuries(range) {
        if let Some((before, after)) = rest.split_at(century) {
            stretches.push(before);
            rest = after;
        }
    }
    stretches.push(rest);
    stretches
}

/// Returns `true` if no common century lies after the first year of
/// `stretch`.
pub fn is_stable(stretch: YearRange) -> bool {
    common_centuries(stretch).all(|c| c == stretch.start())
}

fn evaluate_stretch(stretch: YearRange, report: &mut CycleReport, out: &mut Vec<Year>) {
    if stretch.len() < usize::from(CYCLE_YEARS) || !is_stable(stretch) {
        report.evaluations += stretch.len();
        out.extend(direct::sunday_years(stretch));
        return;
    }

    let start = stretch.start();
    let span = stretch.end().get() - start.get();

    let signature: Vec<u16> = (0..CYCLE_YEARS)
        .filter(|&offset| start.checked_add(offset).is_some_and(is_sunday_christmas))
        .collect();
    report.evaluations += usize::from(CYCLE_YEARS);

    let mut found = Vec::with_capacity(usize::from(span / CYCLE_YEARS + 1) * signature.len());
    for cycle_start in (0..=span).step_by(usize::from(CYCLE_YEARS)) {
        for &offset in &signature {
            let Some(year) = cycle_start
                .checked_add(offset)
                .filter(|&o| o <= span)
                .and_then(|o| start.checked_add(o))
            else {
                break;
            };
            if cycle_start > 0 {
                report.evaluations += 1;
                if !is_sunday_christmas(year) {
                    warn!(
                        stretch = %stretch,
                        year = year.get(),
                        "cycle prediction failed verification, evaluating stretch directly"
                    );
                    report.fallbacks += 1;
                    report.evaluations += stretch.len();
                    out.extend(direct::sunday_years(stretch));
                    return;
                }
            }
            found.push(year);
        }
    }

    report.replicated += 1;
    out.extend(found);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::find_direct;

    fn range(start: i64, end: i64) -> YearRange {
        YearRange::from_bounds(start, end).unwrap()
    }

    #[test]
    fn test_common_centuries() {
        let got: Vec<u16> = common_centuries(range(1650, 2250)).map(Year::get).collect();
        assert_eq!(got, vec![1700, 1800, 1900, 2100, 2200]);
    }

    #[test]
    fn test_common_centuries_includes_start() {
        let got: Vec<u16> = common_centuries(range(1900, 1950)).map(Year::get).collect();
        assert_eq!(got, vec![1900]);
    }

    #[test]
    fn test_stretches_split_every_century() {
        let got: Vec<String> = stable_stretches(range(1650, 2250))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            got,
            vec![
                "1650-1699",
                "1700-1799",
                "1800-1899",
                "1900-2099",
                "2100-2199",
                "2200-2250"
            ]
        );
    }

    #[test]
    fn test_stretches_are_stable() {
        for stretch in stable_stretches(range(1, 9999)) {
            assert!(is_stable(stretch), "unstable stretch {stretch}");
        }
        assert!(!is_stable(range(2050, 2150)));
        assert!(is_stable(range(2100, 2150)));
    }

    #[test]
    fn test_matches_direct_across_century() {
        let r = range(2008, 2121);
        assert_eq!(find_optimized(r), find_direct(r));
    }

    #[test]
    fn test_short_range_is_direct() {
        let (occ, report) = find_optimized_with_report(range(2000, 2010));
        assert_eq!(occ, find_direct(range(2000, 2010)));
        assert_eq!(report.replicated, 0);
        assert_eq!(report.evaluations, 11);
    }

    #[test]
    fn test_long_stretch_is_replicated() {
        let (occ, report) = find_optimized_with_report(range(1900, 2099));
        assert_eq!(occ, find_direct(range(1900, 2099)));
        assert_eq!(report.stretches, 1);
        assert_eq!(report.replicated, 1);
        assert_eq!(report.fallbacks, 0);
        assert!(report.evaluations < 200);
    }

    #[test]
    fn test_no_common_century_emitted() {
        let occ = find_optimized(range(1, 9999));
        for c in common_centuries(range(1, 9999)) {
            assert!(!occ.contains(c), "common century {c} listed");
        }
    }
}
