//! Structured JSON document.

use chrono::NaiveDate;
use serde::Serialize;
use yuletide_calendar::Year;
use yuletide_finder::OccurrenceList;
use yuletide_stats::Analysis;

use crate::error::ExportError;
use crate::year_span;

/// Top-level JSON document.
#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    /// Provenance and size of the result.
    pub metadata: Metadata,
    /// Occurrences in ascending order.
    pub years: &'a [Year],
    /// Statistics when available, otherwise an empty object.
    pub statistics: serde_json::Value,
}

/// Document metadata.
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// ISO date the document was produced.
    pub generated_date: String,
    /// Number of occurrences.
    pub total_count: usize,
    /// `"min-max"` of the listed years, or `"None"` when empty.
    pub year_range: String,
}

/// Serialize occurrences and optional statistics to pretty-printed JSON.
pub fn to_json(
    occurrences: &OccurrenceList,
    analysis: Option<&Analysis>,
    generated: NaiveDate,
) -> Result<String, ExportError> {
    let statistics = match analysis {
        Some(a) => serde_json::to_value(a).map_err(|e| ExportError::Serialization {
            reason: e.to_string(),
        })?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };
    let doc = JsonDocument {
        metadata: Metadata {
            generated_date: generated.to_string(),
            total_count: occurrences.len(),
            year_range: year_span(occurrences),
        },
        years: occurrences.years(),
        statistics,
    };
    serde_json::to_string_pretty(&doc).map_err(|e| ExportError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuletide_calendar::YearRange;
    use yuletide_finder::find_direct;
    use yuletide_stats::analyze;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_without_statistics() {
        let occ = find_direct(YearRange::from_bounds(2000, 2030).unwrap());
        let json = to_json(&occ, None, date()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["metadata"]["generated_date"], "2026-10-19");
        assert_eq!(v["metadata"]["total_count"], 4);
        assert_eq!(v["metadata"]["year_range"], "2005-2022");
        assert_eq!(v["years"], serde_json::json!([2005, 2011, 2016, 2022]));
        assert_eq!(v["statistics"], serde_json::json!({}));
    }

    #[test]
    fn test_with_statistics() {
        let occ = find_direct(YearRange::from_bounds(2000, 2100).unwrap());
        let a = analyze(&occ, 2026).unwrap();
        let json = to_json(&occ, Some(&a), date()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["statistics"]["total_sunday_christmases"], 14);
        assert_eq!(v["statistics"]["next_occurrence"], 2033);
    }

    #[test]
    fn test_empty() {
        let occ = find_direct(YearRange::from_bounds(2021, 2021).unwrap());
        let json = to_json(&occ, None, date()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["metadata"]["year_range"], "None");
        assert_eq!(v["metadata"]["total_count"], 0);
        assert_eq!(v["years"], serde_json::json!([]));
    }
}
