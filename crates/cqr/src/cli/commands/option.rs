//! Implementation of `cqr get-option` and `cqr set-option`.

use std::process::ExitCode;

use cqr_repr::{OptionValue, Representation};
use tracing::debug;

use crate::cli::{
    args::{GetOptionCommand, SetOptionCommand},
    context::CommandContext,
    output::write_json,
};

/// Prints the value of one option on the target node.
pub fn get(ctx: &CommandContext, cmd: &GetOptionCommand) -> ExitCode {
    let tree = match ctx.read_tree(cmd.input.file.as_deref()) {
        Ok(tree) => tree,
        Err(code) => return code,
    };
    let path = cmd.target.at.clone().unwrap_or_default();

    let Some(node) = tree.node_at(path.indices()) else {
        eprintln!("error: no node at path '{path}'");
        return ExitCode::FAILURE;
    };

    match node.get_option(&cmd.key) {
        Some(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("error: option not set: {}", cmd.key);
            ExitCode::FAILURE
        }
    }
}

/// Sets an option on the target node and prints the updated tree.
pub fn set(ctx: &CommandContext, cmd: &SetOptionCommand) -> ExitCode {
    let tree = match ctx.read_tree(cmd.input.file.as_deref()) {
        Ok(tree) => tree,
        Err(code) => return code,
    };
    let path = cmd.target.at.clone().unwrap_or_default();
    let value = parse_value(&cmd.value);
    debug!(key = %cmd.key, %value, %path, "setting option");

    let Some(updated) = tree.set_option_at(path.indices(), cmd.key.as_str(), value) else {
        eprintln!("error: no node at path '{path}'");
        return ExitCode::FAILURE;
    };

    write_json(&updated, ctx.config.render.pretty && !cmd.compact)
}

/// Parses a command-line value as JSON, falling back to a plain string.
fn parse_value(raw: &str) -> OptionValue {
    serde_json::from_str(raw).unwrap_or_else(|_| OptionValue::String(raw.to_string()))
}
