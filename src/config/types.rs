//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::package::{PackageList, DEFAULT_INDENT};

/// Package selection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagesConfig {
    /// Package directories relative to the repository root.
    ///
    /// Empty means the built-in list.
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Output settings for rewritten files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indentation width; unset means two spaces.
    #[serde(default)]
    pub indent: Option<usize>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Package selection.
    #[serde(default)]
    pub packages: PackagesConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        crate::utils::global_config_file()
    }

    /// Merge another config into this one (other takes precedence for set values).
    pub fn merge(&mut self, other: Config) {
        // Package list - a non-empty list replaces rather than extends
        if !other.packages.paths.is_empty() {
            self.packages.paths = other.packages.paths;
        }

        if other.output.indent.is_some() {
            self.output.indent = other.output.indent;
        }
    }

    /// The package list to run over.
    pub fn package_list(&self) -> PackageList {
        if self.packages.paths.is_empty() {
            PackageList::builtin()
        } else {
            PackageList::new(self.packages.paths.iter().map(String::as_str))
        }
    }

    /// Indentation width for rewritten files.
    pub fn indent(&self) -> usize {
        self.output.indent.unwrap_or(DEFAULT_INDENT)
    }
}
