//! OSM tag cleaner CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use osm_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use osm_cli::commands::{run_audit, run_load, run_rules};
use osm_cli::logging::{LogConfig, LogFormat, init_logging};
use osm_cli::summary::{print_audit_report, print_load_summary};
use osm_core::PipelineError;
use osm_output::OutputError;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Load(args) => match run_load(&args) {
            Ok(summary) => {
                print_load_summary(&summary);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Audit(args) => match run_audit(&args) {
            Ok(report) => {
                print_audit_report(&report);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Rules => match run_rules() {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    if let Some(suggestion) = suggestion_for(error) {
        eprintln!("hint: {suggestion}");
    }
    1
}

fn suggestion_for(error: &anyhow::Error) -> Option<String> {
    error.chain().find_map(|cause| {
        if let Some(output) = cause.downcast_ref::<OutputError>() {
            return output.suggestion();
        }
        match cause.downcast_ref::<PipelineError>() {
            Some(PipelineError::Output(output)) => output.suggestion(),
            _ => None,
        }
    })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
