//! `drp` command-line tool.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use drp_cli::commands::{
    load_config, read_input, run_format, run_initial, run_join, run_mode, run_split,
};
use drp_cli::logging::{LogConfig, LogFormat, init_logging};
use drp_model::PickerConfig;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, ConfigArgs, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    match run(&cli.command) {
        Ok(output) => println!("{output}"),
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    }
}

fn run(command: &Command) -> Result<String> {
    match command {
        Command::Format(args) => {
            let config = picker_config(&args.config)?;
            run_format(&read_input(args.input.input.as_deref())?, &config)
        }
        Command::Initial(args) => {
            let config = picker_config(&args.config)?;
            run_initial(&read_input(args.input.input.as_deref())?, &config)
        }
        Command::Mode(args) => {
            let config = picker_config(&args.config)?;
            run_mode(&read_input(args.input.input.as_deref())?, &config)
        }
        Command::Split(args) => run_split(&read_input(args.input.input.as_deref())?, args.table),
        Command::Join(args) => run_join(&read_input(args.input.as_deref())?),
    }
}

/// Config file first, then flag overrides.
fn picker_config(args: &ConfigArgs) -> Result<PickerConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if args.date_only {
        config.date_only = true;
    }
    if let Some(minutes) = args.time_offset {
        config.time_offset = Some(minutes);
    }
    if let Some(mode) = args.range_selector_mode {
        config.range_selector_mode = mode.into();
    }
    Ok(config)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
