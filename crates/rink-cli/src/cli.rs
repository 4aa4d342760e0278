//! CLI argument definitions for the game-report loader.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rink",
    version,
    about = "Load scraped hockey game reports into relational tables",
    long_about = "Load scraped hockey game reports into relational tables.\n\n\
                  Reads raw game JSON, keeps finished games only, normalizes every\n\
                  field and writes eight tables as CSV or JSON lines."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Process raw game files and export the projected tables.
    Process(ProcessArgs),

    /// List the output tables and their columns.
    Tables,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Raw game JSON files, or directories containing them.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for table files (default: ./output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Table file format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: OutputFormatArg,

    /// Number of worker threads (default: one per core).
    #[arg(long = "jobs", short = 'j', value_name = "N")]
    pub jobs: Option<usize>,

    /// Assemble and report without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Status phrase that marks a game as finished. Repeat to accept several;
    /// replaces the built-in phrases when given.
    #[arg(long = "accept-status", value_name = "PHRASE")]
    pub accept_status: Vec<String>,

    /// Skip the structural consistency checks.
    #[arg(long = "no-checks")]
    pub no_checks: bool,

    /// Also write every warning to `issues.json` in the output directory.
    #[arg(long = "issues-report")]
    pub issues_report: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Jsonl,
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
