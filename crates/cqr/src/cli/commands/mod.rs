//! Command implementations and dispatch.

pub mod config;
pub mod init;
pub mod inspect;
pub mod option;
pub mod render;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Render(cmd) => render::run(ctx, &cmd),
        Commands::Inspect(cmd) => inspect::run(ctx, &cmd),
        Commands::GetOption(cmd) => option::get(ctx, &cmd),
        Commands::SetOption(cmd) => option::set(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
