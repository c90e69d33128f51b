//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    Config, RenderSettings,
    parse::{RawConfig, RawRenderSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). For every setting, the first file that defines it
/// wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut render = RenderSettings::default();

    // Lowest precedence first, so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.render {
            apply_raw_render(&mut render, raw);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    debug!(files = configs.len(), ?render, "merged configuration");

    Config {
        render,
        config_root,
    }
}

/// Applies raw render settings to result, overwriting any present values.
fn apply_raw_render(result: &mut RenderSettings, raw: &RawRenderSettings) {
    if let Some(v) = raw.format {
        result.format = v;
    }
    if let Some(v) = raw.pretty {
        result.pretty = v;
    }
    if let Some(v) = raw.indent {
        result.indent = v;
    }
}
