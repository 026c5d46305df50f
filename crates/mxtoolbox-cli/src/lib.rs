//! # mxtoolbox-cli
//!
//! Command-line client for the MxToolbox lookup API.
//!
//! One invocation runs one lookup: the command is resolved, the request is
//! built and sent, and the response is rendered with the layout registered
//! for that same command.
//!
//! ## Features
//!
//! - **Six lookups**: `a`, `ptr`, `tcp`, `blacklist`, `ping`, `scan`
//! - **File credential**: API key read from `apikey.txt` (or `--key-file`)
//! - **Two-level logging**: full trace in `mxapi.log`, short notices on the console
//! - **Multiple output formats**: fixed text layout, JSON, YAML

pub mod cli;
pub mod config;
pub mod credential;
pub mod logging;
pub mod output;

pub use cli::run;
