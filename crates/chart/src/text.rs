//! Plain-text rendering of [`ChartData`].

use crate::series::ChartData;

/// Columns used by the timeline strip.
pub const TIMELINE_WIDTH: usize = 72;

/// Longest bar in the histogram, decade and trend panels.
pub const BAR_WIDTH: usize = 40;

/// Renders the four analysis panels as a plain-text report.
///
/// Panels, top to bottom: timeline, gap histogram with the average marked,
/// occurrences per decade, and the moving-window frequency trend.
pub fn render_text(chart: &ChartData) -> String {
    let mut lines = vec![
        format!(
            "Christmas Sunday analysis ({}-{})",
            chart.range_start, chart.range_end
        ),
        String::new(),
        "Timeline".to_string(),
        format!(
            "{:>4} |{}| {}",
            chart.range_start,
            timeline_strip(chart),
            chart.range_end
        ),
        String::new(),
        "Gap distribution".to_string(),
    ];

    let max_gap_count = chart.gap_histogram.iter().map(|&(_, n)| n).max().unwrap_or(0);
    lines.extend(chart.gap_histogram.iter().map(|&(gap, count)| {
        format!(
            "{gap:>5} years | {:<BAR_WIDTH$} {count}",
            bar(count as f64, max_gap_count as f64)
        )
    }));
    lines.push(match chart.average_gap {
        Some(avg) => format!("average gap: {avg:.2} years"),
        None => "(no gaps)".to_string(),
    });

    lines.push(String::new());
    lines.push("Occurrences per decade".to_string());
    let max_decade = chart.decade_bars.iter().map(|(_, n)| *n).max().unwrap_or(0);
    lines.extend(chart.decade_bars.iter().map(|(label, count)| {
        format!(
            "{label:>6} | {:<BAR_WIDTH$} {count}",
            bar(*count as f64, max_decade as f64)
        )
    }));

    lines.push(String::new());
    lines.push(format!(
        "Frequency trend ({}-occurrence window)",
        chart.trend_window
    ));
    if chart.trend.is_empty() {
        lines.push("(not enough occurrences for the window)".to_string());
    } else {
        let max_pct = chart
            .trend
            .iter()
            .map(|p| p.frequency_percentage)
            .fold(0.0, f64::max);
        lines.extend(thin(&chart.trend, 20).map(|point| {
            format!(
                "{:>5} | {:<BAR_WIDTH$} {:.2}%",
                point.centre,
                bar(point.frequency_percentage, max_pct),
                point.frequency_percentage
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn timeline_strip(chart: &ChartData) -> String {
    let span = usize::from(chart.range_end - chart.range_start) + 1;
    let width = span.min(TIMELINE_WIDTH);
    let mut cells = vec!['.'; width];
    for &year in &chart.timeline {
        let offset = usize::from(year - chart.range_start);
        cells[offset * width / span] = '*';
    }
    cells.into_iter().collect()
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = (value / max * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.clamp(1, BAR_WIDTH))
}

/// At most `n` evenly spaced items, always keeping the last.
fn thin<T>(items: &[T], n: usize) -> impl Iterator<Item = &T> {
    let step = items.len().div_ceil(n).max(1);
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .filter(move |&(i, _)| i % step == 0 || i == last)
        .map(|(_, item)| item)
}
