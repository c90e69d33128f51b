//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use cqr_config::{OutputFormat, RenderSettings};
use cqr_repr::{Cqr, to_json, to_json_pretty};

/// Resolved output options for a single command.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Pretty-print JSON.
    pub pretty: bool,
    /// Spaces per depth level in tree output.
    pub indent: usize,
}

impl OutputOptions {
    /// Starts from configured settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self {
            format: settings.format,
            pretty: settings.pretty,
            indent: settings.indent,
        }
    }
}

/// Writes `tree` to stdout in the selected format.
pub fn write_tree(tree: &Cqr, options: OutputOptions) -> ExitCode {
    match options.format {
        OutputFormat::Canonical => println!("{tree}"),
        OutputFormat::Tree => print!("{}", tree.tree().indent(options.indent)),
        OutputFormat::Json => return write_json(tree, options.pretty),
    }
    ExitCode::SUCCESS
}

/// Writes `tree` to stdout in its structured JSON encoding.
pub fn write_json(tree: &Cqr, pretty: bool) -> ExitCode {
    let encoded = if pretty {
        to_json_pretty(tree)
    } else {
        to_json(tree)
    };
    match encoded {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
