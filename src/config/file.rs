//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::types::Config;
use crate::error::ModshiftError;
use crate::utils::PROJECT_CONFIG_FILE;

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> crate::error::Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| ModshiftError::io("read", path, e))?;

    toml::from_str(&content).map_err(|e| ModshiftError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/modshift/config.toml` (user-level, lowest priority)
/// 2. `.modshiftrc.toml` in the repository root (project-level)
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Missing config files are handled gracefully (defaults are used).
///
/// # Errors
///
/// Returns an error if a specified config file (via CLI) cannot be read or parsed.
/// Broken default config files are reported and ignored.
pub fn load_config(cli_config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let mut config = Config::default();

    // Load user-level config (lowest priority)
    if let Some(user_config_path) = Config::user_config_path() {
        if user_config_path.exists() {
            merge_optional(&mut config, &user_config_path, "user");
        }
    }

    // Load project-level config (medium priority)
    let project_config_path = root.join(PROJECT_CONFIG_FILE);
    if project_config_path.exists() {
        merge_optional(&mut config, &project_config_path, "project");
    }

    // Load CLI-specified config (highest priority)
    if let Some(cli_path) = cli_config_path {
        let cli_config = load_config_from_path(cli_path).with_context(|| {
            format!(
                "Failed to load config from CLI-specified path: {}",
                cli_path.display()
            )
        })?;
        debug!(path = %cli_path.display(), "loaded CLI config");
        config.merge(cli_config);
    }

    Ok(config)
}

fn merge_optional(config: &mut Config, path: &Path, level: &str) {
    match load_config_from_path(path) {
        Ok(loaded) => {
            debug!(path = %path.display(), level, "loaded config");
            config.merge(loaded);
        }
        Err(e) => warn!("Failed to load {level} config at {}: {e}", path.display()),
    }
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# modshift Configuration File
# Place this file at ~/.config/modshift/config.toml for global settings
# or .modshiftrc.toml in your repository root for project-specific settings

# Package selection
[packages]
# Package directories relative to the repository root, visited in order.
# Leave empty to use the built-in list.
paths = [
    # "packages/logger",
    # "packages/utils",
]

# Output settings
[output]
# Indentation width for rewritten package.json and tsconfig.json files
indent = 2
"#
    .to_string()
}
