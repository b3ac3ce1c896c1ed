//! Command-line arguments

use clap::{Parser, ValueEnum};
use dovetailkit_core::MeasurementSystem;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Output format for layout results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One summary line per variant followed by its cut marks
    Text,
    /// The full layout report as JSON
    Json,
}

/// Dovetail layout calculator.
///
/// Lists every tail count that fits on the board and, for each, the cut-mark
/// positions measured from the left edge. Geometry values are taken as typed;
/// anything that is not a number is reported as an invalid field.
#[derive(Parser, Debug, Clone)]
#[command(name = "dovetailkit", version, long_version = LONG_VERSION, about)]
pub struct Args {
    /// Total length of the board edge
    #[arg(short, long, allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Joint depth (thickness of the opposite stock) [default: 18]
    #[arg(short, long, allow_hyphen_values = true)]
    pub depth: Option<String>,

    /// Pin width at its base [default: 19]
    #[arg(short, long, allow_hyphen_values = true)]
    pub pin: Option<String>,

    /// Margin kept free at the left end [default: 10]
    #[arg(long, allow_hyphen_values = true)]
    pub left_offset: Option<String>,

    /// Margin kept free at the right end [default: 10]
    #[arg(long, allow_hyphen_values = true)]
    pub right_offset: Option<String>,

    /// Tail slope as x in 1:x [default: 6]
    #[arg(short, long, allow_hyphen_values = true)]
    pub slope: Option<String>,

    /// Unit label printed next to values (mm or in); values are never converted
    #[arg(short, long)]
    pub unit: Option<MeasurementSystem>,

    /// Decimal places for widths and cut marks
    #[arg(long)]
    pub precision: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Echo the parsed inputs before the results (text output only)
    #[arg(long)]
    pub show_input: bool,

    /// Settings file (.toml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ignore the per-user settings file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Log level (trace, debug, info, warn, error, off); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Write logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}
