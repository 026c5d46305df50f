//! Output formatting for different formats.

mod pretty;

use clap::ValueEnum;
use mxtoolbox::{Command, MxError, Report};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub use pretty::write_report;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed line-oriented text layout
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Write a parsed report in the requested format.
pub fn render<W: Write>(
    command: Command,
    report: &Report,
    format: OutputFormat,
    out: &mut W,
) -> mxtoolbox::Result<()> {
    let fail = |message: String| MxError::Render { command, message };

    match format {
        OutputFormat::Pretty => write_report(report, out).map_err(|e| fail(e.to_string())),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).map_err(|e| fail(e.to_string()))?;
            writeln!(out, "{json}").map_err(|e| fail(e.to_string()))
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(report).map_err(|e| fail(e.to_string()))?;
            write!(out, "{yaml}").map_err(|e| fail(e.to_string()))
        }
    }
}
