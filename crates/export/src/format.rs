//! Export format selection.

use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Structured document with metadata, years and statistics.
    #[default]
    Json,
    /// One row per year with weekday name and ISO date.
    Csv,
    /// Human-readable listing.
    Txt,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Txt => "txt",
        }
    }

    /// Default output file name, e.g. `christmas_sundays.json`.
    pub fn default_filename(self) -> String {
        format!("christmas_sundays.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "txt" | "text" => Ok(Self::Txt),
            _ => Err(ExportError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filenames() {
        assert_eq!(ExportFormat::Json.default_filename(), "christmas_sundays.json");
        assert_eq!(ExportFormat::Csv.default_filename(), "christmas_sundays.csv");
        assert_eq!(ExportFormat::Txt.default_filename(), "christmas_sundays.txt");
    }

    #[test]
    fn test_parse() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat { .. })
        ));
    }
}
