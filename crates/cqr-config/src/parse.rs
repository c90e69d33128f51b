//! Configuration file parsing.
//!
//! Parses individual `.cqr.toml` files into `RawConfig` structures whose fields are all
//! optional, so partial files can be merged.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{ConfigError, OutputFormat};

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Rendering section.
    pub render: Option<RawRenderSettings>,
}

/// Raw rendering settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRenderSettings {
    /// Default output format.
    pub format: Option<OutputFormat>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Spaces per depth level in tree output.
    pub indent: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|config| config.root == Some(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> RawConfig {
        parse_config_str(contents, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn empty_file_has_no_sections() {
        let config = parse("");
        assert!(config.root.is_none());
        assert!(config.render.is_none());
    }

    #[test]
    fn partial_render_section() {
        let config = parse("[render]\nformat = \"tree\"\n");
        let render = config.render.unwrap();
        assert_eq!(render.format, Some(OutputFormat::Tree));
        assert!(render.pretty.is_none());
        assert!(render.indent.is_none());
    }

    #[test]
    fn full_render_section() {
        let config = parse(
            r#"
root = true

[render]
format = "json"
pretty = false
indent = 4
"#,
        );
        assert_eq!(config.root, Some(true));
        let render = config.render.unwrap();
        assert_eq!(render.format, Some(OutputFormat::Json));
        assert_eq!(render.pretty, Some(false));
        assert_eq!(render.indent, Some(4));
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = parse_config_str("[render]\nformat = \"xml\"\n", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = parse_config_str("[render\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = parse_config_file(Path::new("/nonexistent/.cqr.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(!is_root_config(Path::new("/nonexistent/.cqr.toml")));
    }
}
