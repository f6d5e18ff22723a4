//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use yuletide_calendar::Year;
use yuletide_export::ExportFormat;
use yuletide_finder::{FinderConfig, Method};

use crate::cli::FindArgs;
use crate::config::{ExportToml, FinderToml, YuletideConfig};

/// Parses a method name into the corresponding enum variant.
pub fn parse_method(s: &str) -> Result<Method> {
    s.parse().context("invalid [finder] method")
}

/// Parses an export format name into the corresponding enum variant.
pub fn parse_export_format(s: &str) -> Result<ExportFormat> {
    s.parse().context("invalid [export] format")
}

/// Builds a [`FinderConfig`] from the TOML finder section.
pub fn build_finder_config(finder: &FinderToml) -> Result<FinderConfig> {
    Ok(FinderConfig::new()
        .with_method(parse_method(&finder.method)?)
        .with_cache(finder.cache))
}

/// Export format requested by the TOML export section, if any.
pub fn export_format(export: &ExportToml) -> Result<Option<ExportFormat>> {
    export.format.as_deref().map(parse_export_format).transpose()
}

/// Settings for one `find` run after merging flags over the config file.
#[derive(Debug)]
pub struct ResolvedFind {
    pub start: i64,
    pub end: i64,
    pub finder: FinderConfig,
    pub reference_year: Year,
    /// Format and destination, when an export was requested.
    pub export: Option<(ExportFormat, PathBuf)>,
}

/// Merges `find` flags over the config file.
///
/// Each flag wins over its TOML value. The reference year falls back from
/// `--reference-year` to `[analysis].reference_year` to the year of `today`.
pub fn resolve_find(
    args: &FindArgs,
    cfg: &YuletideConfig,
    today: NaiveDate,
) -> Result<ResolvedFind> {
    let mut finder = build_finder_config(&cfg.finder)?;
    if let Some(method) = args.method {
        finder = finder.with_method(method);
    }

    let reference_year = args
        .reference_year
        .or(cfg.analysis.reference_year)
        .unwrap_or_else(|| i64::from(today.year()));
    let reference_year = Year::new(reference_year).context("invalid reference year")?;

    let format = match args.export {
        Some(format) => Some(format),
        None => export_format(&cfg.export)?,
    };
    let export = format.map(|format| {
        let path = args
            .output
            .clone()
            .or_else(|| cfg.export.path.clone())
            .unwrap_or_else(|| PathBuf::from(format.default_filename()));
        (format, path)
    });

    Ok(ResolvedFind {
        start: args.start.unwrap_or(cfg.range.start),
        end: args.end.unwrap_or(cfg.range.end),
        finder,
        reference_year,
        export,
    })
}
