//! Error types for the yuletide-export crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the yuletide-export crate.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Returned when the output file cannot be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serializer failure.
        reason: String,
    },

    /// Returned when a format name does not match any known format.
    #[error("unknown export format '{name}' (expected one of: json, csv, txt)")]
    UnknownFormat {
        /// The unrecognised format name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display() {
        let err = ExportError::Io {
            path: PathBuf::from("/nope/out.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to write /nope/out.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_serialization_display() {
        let err = ExportError::Serialization {
            reason: "bad float".to_string(),
        };
        assert_eq!(err.to_string(), "serialization error: bad float");
    }

    #[test]
    fn test_unknown_format_display() {
        let err = ExportError::UnknownFormat {
            name: "xml".to_string(),
        };
        assert!(err.to_string().contains("'xml'"));
    }
}
