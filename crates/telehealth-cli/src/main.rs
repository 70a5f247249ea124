//! Telehealth disease-symptom CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use telehealth_cli::cli::{Cli, Command, HistoryCommand, LogFormatArg, LogLevelArg};
use telehealth_cli::commands::{
    run_diseases, run_history_list, run_history_stats, run_profile, run_reshape, run_search,
    run_symptoms,
};
use telehealth_cli::logging::{LogConfig, LogFormat, init_logging};
use telehealth_cli::summary::{
    print_diseases, print_history, print_history_summary, print_profile, print_reshape_summary,
    print_search, print_symptoms,
};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let dataset = &cli.dataset;
    let result = match &cli.command {
        Command::Reshape(args) => run_reshape(dataset, args).map(|r| print_reshape_summary(&r)),
        Command::Symptoms(args) => {
            run_symptoms(dataset, &args.disease).map(|s| print_symptoms(&args.disease, &s))
        }
        Command::Diseases(args) => {
            run_diseases(dataset, &args.symptoms).map(|d| print_diseases(&args.symptoms, &d))
        }
        Command::Search(args) => {
            run_search(dataset, &args.query).map(|m| print_search(&args.query, &m))
        }
        Command::Profile(args) => {
            run_profile(dataset, &args.disease, args.save).map(|r| print_profile(&r))
        }
        Command::History(HistoryCommand::List) => {
            run_history_list(dataset).map(|entries| print_history(&entries))
        }
        Command::History(HistoryCommand::Stats) => {
            run_history_stats(dataset).map(|summary| print_history_summary(&summary))
        }
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
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
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_file.is_some())
        .with_log_file(cli.log_file.clone())
}
