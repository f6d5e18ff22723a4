//! Error types for the yuletide-stats crate.

/// Error type for all fallible operations in the yuletide-stats crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// Returned when the occurrence list holds no years, so gap and
    /// frequency statistics are undefined. This is an expected outcome for
    /// short ranges, not a failure of the calculation.
    #[error("no Sunday Christmas found in {start}-{end}")]
    EmptyResult {
        /// First year of the queried range.
        start: u16,
        /// Last year of the queried range.
        end: u16,
    },
}
