//! Implementation of `cqr render`.

use std::process::ExitCode;

use tracing::debug;

use crate::cli::{
    args::RenderCommand,
    context::CommandContext,
    output::{OutputOptions, write_tree},
};

/// Renders a tree in the requested or configured format.
pub fn run(ctx: &CommandContext, cmd: &RenderCommand) -> ExitCode {
    let tree = match ctx.read_tree(cmd.input.file.as_deref()) {
        Ok(tree) => tree,
        Err(code) => return code,
    };

    let mut options = OutputOptions::from_settings(&ctx.config.render);
    if let Some(format) = cmd.format {
        options.format = format;
    }
    if let Some(indent) = cmd.indent {
        options.indent = indent;
    }
    if cmd.compact {
        options.pretty = false;
    }

    debug!(?options, "rendering query tree");
    write_tree(&tree, options)
}
