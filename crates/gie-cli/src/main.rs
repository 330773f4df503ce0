//! GIE AGSI/ALSI command-line client.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use gie_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use gie_cli::commands::{run_catalog, run_query, run_resolve};
use gie_cli::config::load_settings;
use gie_cli::logging::{LogConfig, LogFormat, init_logging};
use gie_client::GieError;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let result = if cli.command.is_query() {
        match load_settings(cli.config.as_deref(), cli.api_key.as_deref()) {
            Ok(settings) => run_query(settings, &cli.command)
                .await
                .map(|output| println!("{output}")),
            Err(error) => Err(error),
        }
    } else {
        match &cli.command {
            Command::Catalog(args) => {
                run_catalog(args);
                Ok(())
            }
            Command::Resolve(args) => run_resolve(args),
            _ => Ok(()),
        }
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            if let Some(gie) = error.downcast_ref::<GieError>() {
                eprintln!("hint: {}", gie.user_message());
            }
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
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_ansi(ansi)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}
