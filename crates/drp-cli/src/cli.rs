//! CLI argument definitions for the `drp` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use drp_model::RangeSelectorMode;

#[derive(Parser)]
#[command(
    name = "drp",
    version,
    about = "Inspect how date range picker values are normalized",
    long_about = "Inspect how date range picker values are normalized.\n\n\
                  Each command reads one JSON document (a value, or pending inputs for\n\
                  `join`) from a file or stdin and prints the result as JSON."
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
    /// Format a value for display (date-only truncation or time offset).
    Format(ValueArgs),

    /// Normalize a value the picker is initialized with.
    Initial(ValueArgs),

    /// Decide whether the picker opens in absolute or relative mode.
    Mode(ValueArgs),

    /// Split an absolute value into pending date and time inputs.
    Split(SplitArgs),

    /// Join pending date and time inputs into an absolute value.
    Join(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// JSON input file; reads stdin when omitted or `-`.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Picker configuration JSON (dateOnly, rangeSelectorMode, relativeOptions, timeOffset).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Discard the time of day (overrides the config file).
    #[arg(long = "date-only")]
    pub date_only: bool,

    /// Fixed offset in minutes east of UTC (overrides the config file).
    #[arg(long = "time-offset", value_name = "MINUTES", allow_negative_numbers = true)]
    pub time_offset: Option<i32>,

    /// Range selectors offered (overrides the config file).
    #[arg(long = "range-selector-mode", value_enum)]
    pub range_selector_mode: Option<RangeSelectorModeArg>,
}

#[derive(Args)]
pub struct ValueArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args)]
pub struct SplitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Render the pending inputs as a table instead of JSON.
    #[arg(long = "table")]
    pub table: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RangeSelectorModeArg {
    RelativeOnly,
    AbsoluteOnly,
    Default,
}

impl From<RangeSelectorModeArg> for RangeSelectorMode {
    fn from(arg: RangeSelectorModeArg) -> Self {
        match arg {
            RangeSelectorModeArg::RelativeOnly => RangeSelectorMode::RelativeOnly,
            RangeSelectorModeArg::AbsoluteOnly => RangeSelectorMode::AbsoluteOnly,
            RangeSelectorModeArg::Default => RangeSelectorMode::Default,
        }
    }
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
