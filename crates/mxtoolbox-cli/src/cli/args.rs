//! Command-line argument definitions using clap.

use clap::Parser;
use mxtoolbox::Command;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Run one MxToolbox lookup and print the result.
///
/// Commands: a, ptr, tcp, blacklist, ping, scan.
/// The API key is read from apikey.txt unless --key-file says otherwise.
#[derive(Parser, Debug)]
#[command(name = "mxapi")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "mxapi -c <command> -a <argument> [-o <option>]")]
pub struct Cli {
    /// Lookup to run (a, ptr, tcp, blacklist, ping, scan)
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    pub command: Command,

    /// Domain, IP address or host name to look up
    #[arg(short = 'a', long = "argument", value_name = "ARGUMENT")]
    pub argument: String,

    /// Port to probe (tcp only; ignored by other commands)
    #[arg(short = 'o', long = "option", value_name = "OPTION")]
    pub modifier: Option<String>,

    /// File holding the API key
    #[arg(short = 'k', long, env = "MXAPI_KEY_FILE", value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// File receiving trace-level diagnostics
    #[arg(long, env = "MXAPI_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// API base URL
    #[arg(long, env = "MXAPI_BASE_URL", hide = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show debug messages on the console
    #[arg(short, long)]
    pub verbose: bool,
}
