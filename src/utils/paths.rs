//! Path utilities.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Project-level config file name, looked up in the repository root.
pub const PROJECT_CONFIG_FILE: &str = ".modshiftrc.toml";

/// Resolve the repository root.
///
/// Uses the given path or the current directory.
///
/// # Errors
///
/// Returns an error if the directory does not exist or is not accessible.
pub fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    let start = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let root = start.canonicalize().with_context(|| {
        format!(
            "Cannot access directory '{}': path does not exist or is not accessible",
            start.display()
        )
    })?;

    if !root.is_dir() {
        anyhow::bail!("'{}' is not a directory", root.display());
    }

    Ok(root)
}

/// Get the config directory for modshift.
///
/// Returns `~/.config/modshift` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("modshift"))
}

/// Get the global config file path.
///
/// Returns `~/.config/modshift/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find the project config file in the repository root.
pub fn local_config_file(root: &Path) -> Option<PathBuf> {
    let config_file = root.join(PROJECT_CONFIG_FILE);
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}
