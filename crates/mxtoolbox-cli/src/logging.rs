//! Process-wide logging.
//!
//! Installed once at startup. The log file gets everything from this
//! workspace down to TRACE; the console only gets INFO and above (DEBUG with
//! `--verbose`). Writes go straight to the file, so nothing needs flushing at
//! exit.

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable overriding the log file filter.
pub const LOG_FILTER_ENV: &str = "MXAPI_LOG";

const DEFAULT_FILE_FILTER: &str =
    "warn,mxtoolbox=trace,mxtoolbox_core=trace,mxtoolbox_client=trace,mxtoolbox_cli=trace";

/// Install the console and file layers.
///
/// If the log file cannot be opened the console layer is still installed
/// and a warning is logged. Calling this twice is a no-op.
pub fn init(log_file: &Path, verbose: bool) {
    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .with_filter(console_level);

    let opened = OpenOptions::new().create(true).append(true).open(log_file);

    let (file, open_error) = match opened {
        Ok(handle) => {
            let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILE_FILTER));
            let layer = fmt::layer()
                .with_writer(Mutex::new(handle))
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter);
            (Some(layer), None)
        }
        Err(e) => (None, Some(e)),
    };

    let _ = tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init();

    if let Some(e) = open_error {
        warn!(path = %log_file.display(), error = %e, "Could not open log file, logging to console only");
    }
}
