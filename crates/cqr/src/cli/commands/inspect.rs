//! Implementation of `cqr inspect`.

use std::{collections::BTreeSet, process::ExitCode};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use cqr_repr::TreeStats;
use serde::Serialize;

use crate::cli::{args::InspectCommand, context::CommandContext};

/// JSON output for `cqr inspect --json`.
#[derive(Serialize)]
struct JsonInspectOutput {
    /// Canonical rendering of the tree.
    canonical: String,
    /// Total number of nodes.
    nodes: usize,
    /// Number of keyword leaves.
    keywords: usize,
    /// Number of Boolean queries.
    booleans: usize,
    /// Number of levels.
    depth: usize,
    /// Distinct operator labels.
    operators: Vec<String>,
    /// Distinct field names.
    fields: Vec<String>,
}

/// Shows a tree view and summary statistics.
pub fn run(ctx: &CommandContext, cmd: &InspectCommand) -> ExitCode {
    let tree = match ctx.read_tree(cmd.input.file.as_deref()) {
        Ok(tree) => tree,
        Err(code) => return code,
    };
    let stats = tree.stats();

    if cmd.json {
        let output = JsonInspectOutput {
            canonical: tree.to_string(),
            nodes: stats.nodes,
            keywords: stats.keywords,
            booleans: stats.booleans,
            depth: stats.depth,
            operators: stats.operators.into_iter().collect(),
            fields: stats.fields.into_iter().collect(),
        };
        return match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                ExitCode::FAILURE
            }
        };
    }

    print!("{}", tree.tree().indent(ctx.config.render.indent));
    println!();
    println!("{}", stats_table(&stats));
    ExitCode::SUCCESS
}

/// Builds the statistics table.
fn stats_table(stats: &TreeStats) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Statistic", "Value"]);

    let joined = |items: &BTreeSet<String>| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    };

    table.add_row(vec![Cell::new("Nodes"), Cell::new(stats.nodes)]);
    table.add_row(vec![Cell::new("Keywords"), Cell::new(stats.keywords)]);
    table.add_row(vec![Cell::new("Boolean queries"), Cell::new(stats.booleans)]);
    table.add_row(vec![Cell::new("Depth"), Cell::new(stats.depth)]);
    table.add_row(vec![Cell::new("Operators"), Cell::new(joined(&stats.operators))]);
    table.add_row(vec![Cell::new("Fields"), Cell::new(joined(&stats.fields))]);
    table
}
