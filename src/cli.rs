//! CLI argument parsing for tracesum

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the summary report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tracesum")]
#[command(version)]
#[command(about = "Summarize total task runtime from workflow trace files", long_about = None)]
pub struct Cli {
    /// Path to the tab-delimited trace file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Parse a set of sample duration strings and exit
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose diagnostics on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
