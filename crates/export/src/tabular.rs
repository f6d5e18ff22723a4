//! Tabular CSV listing.

use yuletide_calendar::GregorianDate;
use yuletide_finder::OccurrenceList;

use crate::error::ExportError;

/// Header row of the CSV output.
pub const CSV_HEADER: [&str; 3] = ["Year", "Day of Week", "Date"];

/// Renders one row per occurrence: year, weekday name, ISO date of Dec 25.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if a record cannot be written, or
/// [`ExportError::Serialization`] if the buffer cannot be recovered.
pub fn to_csv(occurrences: &OccurrenceList) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for year in occurrences.iter() {
        let date = GregorianDate::christmas(year);
        wtr.write_record([
            year.to_string(),
            date.weekday().to_string(),
            date.to_string(),
        ])?;
    }

    let data = wtr.into_inner().map_err(|e| ExportError::Serialization {
        reason: e.to_string(),
    })?;
    String::from_utf8(data).map_err(|e| ExportError::Serialization {
        reason: e.to_string(),
    })
}
