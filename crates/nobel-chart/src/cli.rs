// File: crates/nobel-chart/src/cli.rs
// Summary: Command-line argument parsing and log level selection.

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Render Nobel laureate counts per year, STEM vs Non-STEM, as a line chart.
///
/// Examples:
///   nobel-chart nobel_laureates.csv
///   nobel-chart data.csv --out chart.svg --png chart.png --theme dark
#[derive(Parser, Debug, Clone)]
#[command(name = "nobel-chart", version, about, long_about = None)]
pub struct Args {
    /// Laureates CSV with at least `year`, `category` and `fullname` columns.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// SVG output path.
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Also rasterize the chart to this PNG path.
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Configuration file (defaults to ./nobel-chart.toml when present).
    #[arg(short, long, value_name = "FILE", env = "NOBEL_CHART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Theme preset: light or dark.
    #[arg(long)]
    pub theme: Option<String>,

    /// Chart title.
    #[arg(long)]
    pub title: Option<String>,

    /// Verbose (debug) logging.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a default nobel-chart.toml and exit.
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}
