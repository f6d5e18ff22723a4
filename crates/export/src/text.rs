//! Plain-text listing.

use chrono::NaiveDate;
use yuletide_calendar::christmas_weekday;
use yuletide_finder::OccurrenceList;

use crate::year_span;

/// Renders a titled, human-readable listing.
///
/// ```text
/// Christmas Sundays (2005-2022)
/// Generated: 2026-10-19
/// Total: 4 occurrences
///
/// 2005: Sunday
/// ...
/// ```
pub fn to_text(occurrences: &OccurrenceList, generated: NaiveDate) -> String {
    let mut lines = vec![
        format!("Christmas Sundays ({})", year_span(occurrences)),
        format!("Generated: {generated}"),
        format!("Total: {} occurrences", occurrences.len()),
        String::new(),
    ];
    lines.extend(
        occurrences
            .iter()
            .map(|year| format!("{year}: {}", christmas_weekday(year))),
    );
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
