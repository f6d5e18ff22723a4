//! Export of Sunday-Christmas results to JSON, CSV and plain text.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use yuletide_calendar::YearRange;
//! use yuletide_export::{ExportFormat, export};
//! use yuletide_finder::find_direct;
//!
//! let occ = find_direct(YearRange::from_bounds(2000, 2100).unwrap());
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! export("christmas_sundays.csv", ExportFormat::Csv, &occ, None, today).unwrap();
//! ```

mod error;
mod format;
mod json;
mod tabular;
mod text;

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;
use yuletide_finder::OccurrenceList;
use yuletide_stats::Analysis;

pub use error::ExportError;
pub use format::ExportFormat;
pub use json::{JsonDocument, Metadata, to_json};
pub use tabular::{CSV_HEADER, to_csv};
pub use text::to_text;

/// Renders occurrences in `format`.
///
/// `analysis` is only included in JSON output; `generated` is the date
/// recorded in JSON and text headers.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] if JSON serialization fails, or
/// [`ExportError::Csv`] if a CSV record cannot be written.
pub fn render(
    format: ExportFormat,
    occurrences: &OccurrenceList,
    analysis: Option<&Analysis>,
    generated: NaiveDate,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => to_json(occurrences, analysis, generated),
        ExportFormat::Csv => to_csv(occurrences),
        ExportFormat::Txt => Ok(to_text(occurrences, generated)),
    }
}

/// Renders occurrences in `format` and writes them to `path`.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] if rendering fails, or
/// [`ExportError::Io`] if the file cannot be written.
pub fn export(
    path: impl AsRef<Path>,
    format: ExportFormat,
    occurrences: &OccurrenceList,
    analysis: Option<&Analysis>,
    generated: NaiveDate,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let body = render(format, occurrences, analysis, generated)?;
    std::fs::write(path, body).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        format = %format,
        occurrences = occurrences.len(),
        "results exported"
    );
    Ok(())
}

/// `"min-max"` of the listed years, or `"None"` when empty.
pub(crate) fn year_span(occurrences: &OccurrenceList) -> String {
    match (occurrences.first(), occurrences.last()) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => "None".to_string(),
    }
}
