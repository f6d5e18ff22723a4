//! Statistical summaries of Sunday-Christmas occurrences.

mod analysis;
mod error;
mod gaps;

pub use analysis::{Analysis, analyze, distribution};
pub use error::StatsError;
pub use gaps::{GapSummary, consecutive_gaps};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Rounds to two decimal places, halves away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
