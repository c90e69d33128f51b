//! Command-line interface for `cqr`, the common query representation tool.
//!
//! `cqr` reads query trees in their structured JSON encoding and renders, inspects or edits
//! them. It is a diagnostic companion for parsers that emit trees and generators that consume
//! them.

mod cli;

use std::{io, process::ExitCode};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // `init` must work even when an existing config file is broken
    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    debug!(cwd = %ctx.cwd.display(), "dispatching command");
    commands::run(cli.command, &ctx)
}

/// Installs a stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `-v` raises the level from `warn` to `info`, and
/// `-vv` to `debug`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}
