//! CLI argument definitions for the claims resubmission tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "claims-resubmit",
    version,
    about = "Reconcile denied insurance claims and flag resubmission candidates",
    long_about = "Reconcile denied insurance claims from two record systems.\n\n\
                  Reads an Alpha CSV export and a Beta JSON export, decides which\n\
                  denials are worth resubmitting against a fixed reference date,\n\
                  and writes a candidates report with remediation advice."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow patient identifiers in log output.
    ///
    /// By default patient IDs are redacted from logs. Enable only in
    /// environments where log storage is approved for PHI.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process claim exports and write the resubmission candidates report.
    Run(RunArgs),

    /// Print the classification rule tables and recommended actions.
    Rules,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the Alpha system CSV export.
    #[arg(value_name = "ALPHA_CSV")]
    pub alpha: PathBuf,

    /// Path to the Beta system JSON export.
    #[arg(value_name = "BETA_JSON")]
    pub beta: PathBuf,

    /// Output path for the candidates report
    /// (default: resubmission_candidates.json).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Reference date for claim age computation (YYYY-MM-DD).
    ///
    /// Claim age is measured against this date rather than the wall clock so
    /// runs are reproducible.
    #[arg(
        long = "reference-date",
        value_name = "DATE",
        default_value = "2025-07-30"
    )]
    pub reference_date: NaiveDate,

    /// Evaluate and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
