//! # yuletide-chart
//!
//! Chart series for a Sunday-Christmas analysis and a plain-text renderer.
//!
//! | Panel | Series |
//! |-------|--------|
//! | Timeline | every occurrence year across the range |
//! | Gap histogram | count per distinct gap, average marked |
//! | Decades | occurrences per decade |
//! | Trend | moving-window frequency, `max(28, n / 10)` occurrences wide |

mod series;
mod text;

pub use series::{
    ChartData, MIN_TREND_WINDOW, TrendPoint, frequency_trend, gap_histogram, trend_window,
};
pub use text::{BAR_WIDTH, TIMELINE_WIDTH, render_text};
