//! Integration tests writing each export format to disk.

use chrono::NaiveDate;
use tempfile::tempdir;
use yuletide_calendar::YearRange;
use yuletide_export::{ExportError, ExportFormat, export};
use yuletide_finder::find_optimized;
use yuletide_stats::analyze;

fn generated() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn writes_all_formats() {
    let dir = tempdir().unwrap();
    let occ = find_optimized(YearRange::from_bounds(2008, 2121).unwrap());
    let analysis = analyze(&occ, 2026).unwrap();

    for format in [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Txt] {
        let path = dir.path().join(format.default_filename());
        export(&path, format, &occ, Some(&analysis), generated()).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("2118"), "{format} output missing 2118");
    }
}

#[test]
fn json_round_trips_through_serde_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let occ = find_optimized(YearRange::from_bounds(2008, 2121).unwrap());
    let analysis = analyze(&occ, 2026).unwrap();
    export(&path, ExportFormat::Json, &occ, Some(&analysis), generated()).unwrap();

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["metadata"]["total_count"], 17);
    assert_eq!(v["metadata"]["year_range"], "2011-2118");
    assert_eq!(v["years"][0], 2011);
    assert_eq!(v["statistics"]["first_occurrence"], 2011);
}

#[test]
fn csv_has_one_row_per_year() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let occ = find_optimized(YearRange::from_bounds(2008, 2121).unwrap());
    export(&path, ExportFormat::Csv, &occ, None, generated()).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    assert_eq!(body.lines().count(), occ.len() + 1);
    assert!(body.lines().skip(1).all(|l| l.contains(",Sunday,")));
    assert!(body.contains("2101,Sunday,2101-12-25"));
}

#[test]
fn unwritable_path_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    let occ = find_optimized(YearRange::from_bounds(2000, 2030).unwrap());
    let err = export(&path, ExportFormat::Txt, &occ, None, generated()).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}
