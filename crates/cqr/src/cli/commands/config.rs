//! Implementation of `cqr config`.

use std::process::ExitCode;

use cqr_config::discover_config_files;

use crate::cli::context::CommandContext;

/// Lists the config files in effect and prints the merged settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let files = discover_config_files(&ctx.cwd);
    if files.is_empty() {
        println!("# no config files found; using defaults");
    } else {
        println!("# config files (highest precedence first):");
        for file in &files {
            println!("#   {}", file.display());
        }
    }
    println!();

    match ctx.config.settings_to_toml() {
        Ok(toml) => {
            print!("{toml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
