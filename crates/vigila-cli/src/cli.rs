//! CLI argument definitions for the consolidator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vigila",
    version,
    about = "Consolidate surveillance notification extracts",
    long_about = "Merge independently produced surveillance extracts, collapse repeated\n\
                  notifications of one clinical episode into a single case, and write a\n\
                  consolidated table plus per-event case counts."
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
    /// Consolidate one or more extracts into a single case table.
    Consolidate(ConsolidateArgs),

    /// List the canonical fields and their accepted column synonyms.
    Fields,
}

#[derive(Parser)]
pub struct ConsolidateArgs {
    /// Delimited-text extracts to consolidate.
    #[arg(value_name = "EXTRACT", required = true)]
    pub extracts: Vec<PathBuf>,

    /// Output directory (default: "salida" next to the first extract).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON synonym table overriding the built-in column mapping.
    #[arg(long = "synonyms", value_name = "JSON")]
    pub synonyms: Option<PathBuf>,

    /// Keep rows classified as suspected instead of filtering them out.
    #[arg(long = "keep-suspected")]
    pub keep_suspected: bool,

    /// Skip deriving epidemiological week/year columns.
    #[arg(long = "no-epi-week")]
    pub no_epi_week: bool,
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
