//! Find command: list Sunday Christmases, then optionally analyse, chart and
//! export them.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span, warn};

use yuletide_chart::{ChartData, render_text};
use yuletide_export::export;
use yuletide_finder::{Finder, OccurrenceList};
use yuletide_stats::{Analysis, analyze};

use crate::cli::FindArgs;
use crate::config::YuletideConfig;
use crate::convert::{self, ResolvedFind};

/// Run the find pipeline.
pub fn run(args: FindArgs) -> Result<()> {
    let _cmd = info_span!("find").entered();

    // 1. Load config, CLI flags override file values
    let cfg = match args.config {
        Some(ref path) => YuletideConfig::load(path)?,
        None => YuletideConfig::default(),
    };
    let today = Local::now().date_naive();
    let ResolvedFind {
        start,
        end,
        finder: finder_config,
        reference_year,
        export: export_target,
    } = convert::resolve_find(&args, &cfg, today)?;

    // 2. Search
    let mut finder = Finder::new(finder_config);
    let occurrences = finder
        .find_years(start, end)
        .with_context(|| format!("cannot search years {start} to {end}"))?;
    info!(
        method = %finder.config().method(),
        count = occurrences.len(),
        "search complete"
    );

    println!("Christmas Sundays between {start} and {end}:");
    println!("Found {} occurrences:", occurrences.len());
    println!("{}", format_years(&occurrences));

    // 3. Analysis, needed for both the report and the charts
    let analysis = if args.analyze || args.visualize {
        match analyze(&occurrences, reference_year.get()) {
            Ok(a) => Some(a),
            Err(e) => {
                warn!("analysis skipped: {e}");
                None
            }
        }
    } else {
        None
    };

    if args.analyze {
        if let Some(ref a) = analysis {
            print!("\n{}", format_analysis(a));
        }
    }

    // 4. Charts
    if args.visualize {
        match analysis {
            Some(ref a) => {
                let text = render_text(&ChartData::new(&occurrences, a));
                match args.chart_output {
                    Some(ref path) => {
                        std::fs::write(path, &text).with_context(|| {
                            format!("failed to write charts: {}", path.display())
                        })?;
                        println!("Visualization saved to {}", path.display());
                    }
                    None => print!("\n{text}"),
                }
            }
            None => warn!("nothing to chart"),
        }
    }

    // 5. Export
    if let Some((format, path)) = export_target {
        export(&path, format, &occurrences, analysis.as_ref(), today)
            .with_context(|| format!("failed to export {format} results"))?;
        println!("Results exported to {}", path.display());
    }

    Ok(())
}

/// `[2005, 2011, 2016]`
fn format_years(occurrences: &OccurrenceList) -> String {
    let years: Vec<String> = occurrences.iter().map(|y| y.to_string()).collect();
    format!("[{}]", years.join(", "))
}

fn format_analysis(a: &Analysis) -> String {
    let mut lines = vec![
        "Analysis:".to_string(),
        format!("total_sunday_christmases: {}", a.total_sunday_christmases),
        format!("total_years: {}", a.total_years),
        format!("frequency_percentage: {:.2}", a.frequency_percentage),
    ];
    if let Some(ref g) = a.gap_summary {
        lines.push(format!("average_gap: {:.2}", g.average_gap));
        lines.push(format!(
            "max_gap: {} ({}-{})",
            g.max_gap, g.max_gap_years.0, g.max_gap_years.1
        ));
        lines.push(format!(
            "most_common_gap: {} ({} times)",
            g.most_common_gap, g.most_common_gap_frequency
        ));
    }
    lines.push(format!("first_occurrence: {}", a.first_occurrence));
    lines.push(format!("last_occurrence: {}", a.last_occurrence));
    lines.push(match a.next_occurrence {
        Some(y) => format!("next_occurrence (from {}): {y}", a.reference_year),
        None => format!("next_occurrence (from {}): none in range", a.reference_year),
    });
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuletide_calendar::YearRange;
    use yuletide_finder::find_direct;

    fn occurrences(start: i64, end: i64) -> OccurrenceList {
        find_direct(YearRange::from_bounds(start, end).unwrap())
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(&occurrences(2000, 2020)), "[2005, 2011, 2016]");
        assert_eq!(format_years(&occurrences(2023, 2026)), "[]");
    }

    #[test]
    fn test_format_analysis() {
        let a = analyze(&occurrences(2000, 2100), 2026).unwrap();
        let text = format_analysis(&a);
        assert!(text.starts_with("Analysis:\n"));
        assert!(text.contains("frequency_percentage: 13.86\n"));
        assert!(text.contains("average_gap: 6.92\n"));
        assert!(text.contains("max_gap: 11 (2022-2033)\n"));
        assert!(text.contains("most_common_gap: 6 (7 times)\n"));
        assert!(text.contains("next_occurrence (from 2026): 2033\n"));
    }

    #[test]
    fn test_format_analysis_single_occurrence() {
        let a = analyze(&occurrences(2020, 2024), 2030).unwrap();
        let text = format_analysis(&a);
        assert!(!text.contains("average_gap"));
        assert!(text.contains("none in range"));
    }
}
