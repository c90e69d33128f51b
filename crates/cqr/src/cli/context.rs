//! Shared context for running CLI commands.

use std::{
    env, fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};

use cqr_config::Config;
use cqr_repr::{Cqr, from_json, from_reader};
use tracing::{debug, info};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Reads and decodes a query tree from `file`, or from stdin when absent or `-`.
    pub fn read_tree(&self, file: Option<&Path>) -> Result<Cqr, ExitCode> {
        let result = match file {
            Some(path) if path != Path::new("-") => {
                let path = self.cwd.join(path);
                debug!(path = %path.display(), "reading query tree");
                let contents = fs::read_to_string(&path).map_err(|e| {
                    eprintln!("error: failed to read {}: {e}", path.display());
                    ExitCode::FAILURE
                })?;
                from_json(&contents)
            }
            _ => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    info!("reading query tree from terminal; end input with Ctrl-D");
                }
                debug!("reading query tree from stdin");
                from_reader(stdin.lock())
            }
        };

        result.map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
