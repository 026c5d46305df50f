//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use args::Cli;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use mxtoolbox::{ErrorClass, MxError, FAILURE_EXIT_CODE};
use std::error::Error as _;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};

use crate::config::{Config, Settings, DEFAULT_LOG_FILE, LOG_FILE_ENV};
use crate::logging;

/// Run the CLI application.
///
/// Every failure is logged in full, summarised on the console and turned
/// into exit code 2 here; nothing below this function exits the process.
pub async fn run() -> ExitCode {
    let config = Config::load();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let log_file = usage_log_file(
                std::env::var_os(LOG_FILE_ENV),
                config.as_ref().ok().and_then(|c| c.log_file.clone()),
            );
            return usage_failure(&e, &log_file);
        }
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            logging::init(
                cli.log_file.as_deref().unwrap_or(Path::new(DEFAULT_LOG_FILE)),
                cli.verbose,
            );
            return report_failure(&MxError::Config(format!("{e:#}")));
        }
    };

    let settings = Settings::resolve(&cli, config);
    logging::init(&settings.log_file, settings.verbose);
    debug!(command = %cli.command, argument = %cli.argument, "Parsed command line");

    let ctx = commands::Context::new(&settings);

    match commands::lookup::execute(&ctx, cli.command, cli.argument, cli.modifier).await {
        Ok(()) => {
            debug!(command = %cli.command, "Finished");
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

/// Log file for a command line clap rejected.
///
/// `--log-file` was not parsed, so only its environment variable and the
/// config file are left to consult.
fn usage_log_file(env: Option<OsString>, config: Option<PathBuf>) -> PathBuf {
    env.filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or(config)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Usage line to print after a clap error that does not carry one.
///
/// Value errors (unknown command, empty or invalid option values) render
/// without it.
fn missing_usage(e: &clap::Error) -> Option<String> {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ if e.render().to_string().contains("Usage:") => None,
        _ => Some(Cli::command().render_usage().to_string()),
    }
}

/// Print clap's usage or help text and pick the exit code.
fn usage_failure(e: &clap::Error, log_file: &Path) -> ExitCode {
    if e.kind() == ErrorKind::DisplayVersion {
        let _ = e.print();
        return ExitCode::SUCCESS;
    }

    logging::init(log_file, false);
    debug!(kind = ?e.kind(), "Exiting on usage: {}", e.render());
    let _ = e.print();
    if let Some(usage) = missing_usage(e) {
        eprintln!("\n{usage}");
    }

    ExitCode::from(FAILURE_EXIT_CODE)
}

/// Log the full error chain, show the short message, return exit code 2.
fn report_failure(err: &MxError) -> ExitCode {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    debug!(class = ?err.class(), "{chain}");

    match err.class() {
        ErrorClass::Usage | ErrorClass::Credential => error!("{err}"),
        ErrorClass::Transport | ErrorClass::Parse | ErrorClass::Output => {
            error!("{}", err.summary());
        }
    }

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(args: &[&str]) -> clap::Error {
        Cli::try_parse_from(std::iter::once("mxapi").chain(args.iter().copied())).unwrap_err()
    }

    #[test]
    fn value_errors_get_a_usage_line() {
        for args in [
            &["-c", "foobar", "-a", "example.com"][..],
            &["-c", "tcp", "-a", "example.com", "-f", "csv"][..],
        ] {
            let usage = missing_usage(&parse_err(args)).unwrap();
            assert!(usage.starts_with("Usage: mxapi -c <command> -a <argument>"));
        }
    }

    #[test]
    fn usage_is_not_printed_twice() {
        assert!(missing_usage(&parse_err(&["-c", "a"])).is_none());
        assert!(missing_usage(&parse_err(&["--bogus"])).is_none());
        assert!(missing_usage(&parse_err(&["-h"])).is_none());
    }

    #[test]
    fn usage_log_file_prefers_environment() {
        let config = Some(PathBuf::from("from-config.log"));

        assert_eq!(
            usage_log_file(Some("from-env.log".into()), config.clone()),
            PathBuf::from("from-env.log")
        );
        assert_eq!(usage_log_file(None, config), PathBuf::from("from-config.log"));
        assert_eq!(usage_log_file(Some(OsString::new()), None), PathBuf::from(DEFAULT_LOG_FILE));
    }
}
