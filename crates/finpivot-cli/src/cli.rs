//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use finpivot_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "finpivot",
    version,
    about = "Consolidate financial exports and pivot their cost-center allocations",
    long_about = "Consolidate receivables and payables exports into one table and reshape\n\
                  the flat cost-center columns (Centro de Custo N / Valor no Centro de Custo N)\n\
                  into one row per allocation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge receivables and payables exports, then pivot the result.
    Consolidate(ConsolidateArgs),

    /// Pivot the cost-center columns of a single CSV file.
    Pivot(PivotArgs),

    /// Show how the columns of a CSV file are classified.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct ConsolidateArgs {
    /// Receivables export (CSV with a header row).
    #[arg(value_name = "RECEIVABLES")]
    pub receivables: PathBuf,

    /// Payables export (CSV with a header row).
    #[arg(value_name = "PAYABLES")]
    pub payables: PathBuf,

    /// Output directory (default: <RECEIVABLES parent>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON pipeline configuration.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct PivotArgs {
    /// CSV file to pivot.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>_pivoted.csv).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Prefix of the cost-center name columns.
    #[arg(long = "label-prefix", value_name = "PREFIX")]
    pub label_prefix: Option<String>,

    /// Prefix of the cost-center amount columns.
    #[arg(long = "value-prefix", value_name = "PREFIX")]
    pub value_prefix: Option<String>,

    /// JSON pipeline configuration.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV file to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON pipeline configuration.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
