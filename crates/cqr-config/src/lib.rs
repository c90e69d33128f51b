//! Configuration system for cqr.
//!
//! cqr uses TOML configuration files named `.cqr.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.cqr.toml` files
//! found, then loading `~/.cqr.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawRenderSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};

/// Top-level merged configuration for cqr.
///
/// This represents the fully resolved configuration after merging all discovered `.cqr.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output rendering settings.
    pub render: RenderSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.cqr.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            render: self.render.clone(),
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::SerializeToml)
    }
}

/// Output format for rendered query trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single-line canonical rendering.
    #[default]
    Canonical,
    /// Indented one-node-per-line view.
    Tree,
    /// Structured JSON encoding.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Canonical => "canonical",
            Self::Tree => "tree",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "canonical" => Ok(Self::Canonical),
            "tree" => Ok(Self::Tree),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}' (expected canonical, tree or json)"
            )),
        }
    }
}

/// Settings that control how trees are written.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Default output format.
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Spaces per depth level in tree output.
    pub indent: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Canonical,
            pretty: true,
            indent: 2,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Output rendering settings.
    render: RenderSettings,
}
