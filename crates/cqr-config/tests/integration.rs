//! Integration tests for cqr-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use cqr_config::{CONFIG_FILENAME, Config, ConfigError, OutputFormat, local_template};

/// Temporary directory tree for a single test.
struct TestEnv {
    /// Backing temporary directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a `.cqr.toml` into `rel_dir` and returns its path.
    fn write_config(&self, rel_dir: &str, content: &str) -> PathBuf {
        let path = self.create_dir(rel_dir).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_root_config_isolates_from_home() {
    let env = TestEnv::new();
    env.write_config("", "root = true\n");

    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.render.format, OutputFormat::Canonical);
    assert!(config.render.pretty);
    assert_eq!(config.render.indent, 2);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
}

#[test]
fn test_nested_configs_merge() {
    let env = TestEnv::new();
    env.write_config(
        "",
        "root = true\n[render]\nformat = \"tree\"\nindent = 4\npretty = false\n",
    );
    env.write_config("project", "[render]\nformat = \"json\"\n");
    let cwd = env.create_dir("project/queries");

    let config = Config::load(&cwd).unwrap();

    assert_eq!(config.render.format, OutputFormat::Json);
    assert_eq!(config.render.indent, 4);
    assert!(!config.render.pretty);
    assert_eq!(config.config_root, Some(env.path().join("project")));
}

#[test]
fn test_invalid_config_reports_path() {
    let env = TestEnv::new();
    let path = env.write_config("", "root = true\n[render]\nindent = \"wide\"\n");

    let err = Config::load(env.path()).unwrap_err();

    match &err {
        ConfigError::ParseToml { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected ParseToml, got {other:?}"),
    }
    assert!(err.to_string().contains(CONFIG_FILENAME));
}

#[test]
fn test_load_from_files_empty_is_default() {
    let config = Config::load_from_files(&[]).unwrap();
    assert!(config.config_root.is_none());
    assert_eq!(config.render.format, OutputFormat::Canonical);
}

#[test]
fn test_init_template_loads_as_defaults() {
    let env = TestEnv::new();
    let path = env.write_config("", &local_template());

    let config = Config::load_from_files(&[path]).unwrap();

    assert_eq!(config.render.format, OutputFormat::Canonical);
    assert_eq!(config.render.indent, 2);
}

#[test]
fn test_settings_to_toml_round_trips() {
    let env = TestEnv::new();
    env.write_config("", "root = true\n[render]\nformat = \"tree\"\nindent = 3\n");
    let config = Config::load(env.path()).unwrap();

    let toml = config.settings_to_toml().unwrap();
    let reloaded_path = env.write_config("copy", &toml);
    let reloaded = Config::load_from_files(&[reloaded_path]).unwrap();

    assert_eq!(reloaded.render.format, OutputFormat::Tree);
    assert_eq!(reloaded.render.indent, 3);
}
