use std::path::PathBuf;

use clap::{Parser, Subcommand};
use yuletide_export::ExportFormat;
use yuletide_finder::Method;

/// Yuletide Sunday-Christmas finder.
#[derive(Parser)]
#[command(
    name = "yuletide",
    version,
    about = "Find the years whose Christmas Day falls on a Sunday"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List Sunday Christmases in a year range, optionally analysed and exported.
    Find(FindArgs),
    /// Check the enumeration methods against known results and each other.
    Verify(VerifyArgs),
}

/// Arguments for the `find` subcommand.
#[derive(clap::Args)]
pub struct FindArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First year of the range (default 2000).
    #[arg(long)]
    pub start: Option<i64>,

    /// Last year of the range, inclusive (default 2100).
    #[arg(long)]
    pub end: Option<i64>,

    /// Enumeration method: direct, optimized or lazy.
    #[arg(short, long)]
    pub method: Option<Method>,

    /// Print statistics about the occurrences.
    #[arg(short, long)]
    pub analyze: bool,

    /// Year from which the next occurrence is reported (default: current year).
    #[arg(long)]
    pub reference_year: Option<i64>,

    /// Render text charts of the analysis.
    #[arg(long)]
    pub visualize: bool,

    /// Write the charts to this file instead of stdout.
    #[arg(long, requires = "visualize")]
    pub chart_output: Option<PathBuf>,

    /// Export the results: json, csv or txt.
    #[arg(short, long)]
    pub export: Option<ExportFormat>,

    /// Export destination (default `christmas_sundays.<ext>`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `verify` subcommand.
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Years per comparison block when checking the methods against each other.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..))]
    pub block: u16,
}
