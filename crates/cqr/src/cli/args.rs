//! Clap argument definitions for the `cqr` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use cqr_config::OutputFormat;
use cqr_repr::NodePath;

/// Parse an output format from a string.
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

/// Parse a dotted node path from a string.
fn parse_path(s: &str) -> Result<NodePath, String> {
    s.parse::<NodePath>().map_err(|e| e.to_string())
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "cqr")]
#[command(about = "Common Query Representation - render, inspect and edit query trees")]
pub struct Cli {
    /// Log verbosity on stderr (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared input flag for commands that read a tree.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Encoded query tree to read ("-" or omitted for stdin)
    pub file: Option<PathBuf>,
}

/// Shared node-addressing flag.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Dotted child-index path of the target node, e.g. 0.1 [default: root]
    #[arg(long, value_parser = parse_path)]
    pub at: Option<NodePath>,
}

/// Arguments for `cqr render`.
#[derive(Args, Debug, Clone)]
pub struct RenderCommand {
    #[command(flatten)]
    /// Input selection.
    pub input: InputArgs,

    /// Output format: canonical, tree or json [default: from config]
    #[arg(short = 'f', long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Spaces per level for tree output [default: from config]
    #[arg(long)]
    pub indent: Option<usize>,

    /// Write JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `cqr inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    #[command(flatten)]
    /// Input selection.
    pub input: InputArgs,

    /// Output statistics in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `cqr get-option`.
#[derive(Args, Debug, Clone)]
pub struct GetOptionCommand {
    /// Option key
    pub key: String,

    #[command(flatten)]
    /// Input selection.
    pub input: InputArgs,

    #[command(flatten)]
    /// Target node.
    pub target: TargetArgs,
}

/// Arguments for `cqr set-option`.
#[derive(Args, Debug, Clone)]
pub struct SetOptionCommand {
    /// Option key
    pub key: String,

    /// Option value, parsed as JSON; anything that is not valid JSON is stored as a string
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    #[command(flatten)]
    /// Input selection.
    pub input: InputArgs,

    #[command(flatten)]
    /// Target node.
    pub target: TargetArgs,

    /// Write JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `cqr init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.cqr.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `cqr` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render an encoded query tree
    #[command(after_help = "\
FORMATS:
  canonical   (AND[] `cancer`[title][] `lung`[][])
  tree        one node per line, indented by depth
  json        structured encoding with a \"type\" tag per node

EXAMPLES:
  cqr render query.json
  cqr render --format tree query.json
  cat query.json | cqr render -f json --compact")]
    Render(RenderCommand),

    /// Show a tree view and summary statistics
    Inspect(InspectCommand),

    /// Print one option of a node as JSON
    GetOption(GetOptionCommand),

    /// Set an option on a node and print the updated tree as JSON
    #[command(after_help = "\
EXAMPLES:
  cqr set-option boost 2.5 query.json
  cqr set-option source pubmed --at 0.1 query.json
  cqr set-option meta '{\"origin\": \"manual\"}' query.json")]
    SetOption(SetOptionCommand),

    /// Initialize cqr configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
