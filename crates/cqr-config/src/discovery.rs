//! Configuration file discovery.
//!
//! Discovers `.cqr.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.cqr.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".cqr.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.cqr.toml`) last.
/// Files closer to `cwd` have higher precedence during merging.
///
/// Discovery stops at the first file with `root = true`; the global file is only appended
/// when no such file was found.
///
/// Returns an empty vector if no configuration files are found.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            debug!(path = %config_path.display(), is_root, "found config file");
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        debug!(path = %global_path.display(), "found global config file");
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.cqr.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Discovers from `cwd`, dropping the real global config if one exists on this machine.
    fn local_configs(cwd: &Path) -> Vec<PathBuf> {
        discover_config_files(cwd)
            .into_iter()
            .filter(|p| !is_global_config(p))
            .collect()
    }

    #[test]
    fn nothing_found_in_empty_tree() {
        let dir = TestDir::new();
        let cwd = dir.create_dir("queries/pubmed");
        assert!(local_configs(&cwd).is_empty());
    }

    #[test]
    fn closest_config_comes_first() {
        let dir = TestDir::new();
        let outer = dir.create_config("");
        let inner = dir.create_config("project");
        let cwd = dir.create_dir("project/queries/deep");

        assert_eq!(local_configs(&cwd), vec![inner, outer]);
    }

    #[test]
    fn config_in_cwd_is_found() {
        let dir = TestDir::new();
        let config = dir.create_config("");
        assert_eq!(local_configs(dir.path()), vec![config]);
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let dir = TestDir::new();
        fs::create_dir_all(dir.path().join(CONFIG_FILENAME)).unwrap();
        let cwd = dir.create_dir("sub");
        assert!(local_configs(&cwd).is_empty());
    }

    #[test]
    fn root_config_stops_walk_and_skips_global() {
        let dir = TestDir::new();
        dir.create_config("");
        let root = dir.create_root_config("project");
        let child = dir.create_config("project/sub");
        let cwd = dir.create_dir("project/sub/deep");

        assert_eq!(discover_config_files(&cwd), vec![child, root]);
    }

    #[test]
    fn root_false_keeps_walking() {
        let dir = TestDir::new();
        let outer = dir.create_config("");
        let inner = dir.create_config_with_content("project", "root = false\n");
        let cwd = dir.create_dir("project/src");

        assert_eq!(local_configs(&cwd), vec![inner, outer]);
    }

    #[test]
    fn global_path_uses_config_filename() {
        let global = global_config_path().unwrap();
        assert!(global.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&global));
        assert!(!is_global_config(Path::new("/elsewhere/.cqr.toml")));
    }
}
