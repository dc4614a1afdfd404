//! ADIF normalizer CLI.

use adif_cli::logging::{LogConfig, LogFormat, init_logging};
use adif_core::FieldKind;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_bands, run_batch, run_coord, run_dxcc, run_freq, run_values};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let format = cli.output_format;
    let result = match &cli.command {
        Command::Date(args) => run_values(FieldKind::Date, args, format),
        Command::Time(args) => run_values(FieldKind::Time, args, format),
        Command::Freq(args) => run_freq(args, format),
        Command::Coord(args) => run_coord(args, format),
        Command::CheckCoord(args) => run_values(FieldKind::CoordinateCode, args, format),
        Command::Bands => run_bands(format).map(|()| false),
        Command::Dxcc(args) => run_dxcc(args, format),
        Command::Batch(args) => run_batch(args, format),
    };
    let exit_code = match result {
        Ok(rejected) => i32::from(rejected),
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> LogConfig {
        let argv = std::iter::once("adif-normalize").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("parse cli");
        log_config_from_cli(&cli)
    }

    #[test]
    fn default_level_is_warn_and_env_may_override() {
        let config = config_for(&["bands"]);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn verbosity_flags_shift_the_level() {
        assert_eq!(config_for(&["-v", "bands"]).level_filter, LevelFilter::INFO);
        assert_eq!(config_for(&["-vv", "bands"]).level_filter, LevelFilter::DEBUG);
        assert_eq!(config_for(&["-q", "bands"]).level_filter, LevelFilter::ERROR);
        assert!(!config_for(&["-v", "bands"]).use_env_filter);
    }

    #[test]
    fn explicit_log_level_wins_over_verbosity() {
        let config = config_for(&["-q", "--log-level", "debug", "bands"]);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn color_and_log_file_flags_are_applied() {
        let config = config_for(&["--color", "never", "--log-format", "json", "bands"]);
        assert!(!config.with_ansi);
        assert_eq!(config.format, LogFormat::Json);

        let config = config_for(&["--color", "always", "--log-file", "run.log", "bands"]);
        assert!(config.with_ansi);
        assert_eq!(
            config.log_file.as_deref(),
            Some(std::path::Path::new("run.log"))
        );
    }
}
