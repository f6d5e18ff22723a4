//! Error types for the yuletide-finder crate.

use yuletide_calendar::CalendarError;

/// Error type for all fallible operations in the yuletide-finder crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinderError {
    /// The requested range is reversed or outside the year domain.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when a method name does not match any known method.
    #[error("unknown method '{name}' (expected one of: direct, optimized, lazy)")]
    UnknownMethod {
        /// The unrecognised method name.
        name: String,
    },
}
