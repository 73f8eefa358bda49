//! The ordered list of package directories a run visits.

use std::path::{Path, PathBuf};

/// Manifest file name inside each package directory.
pub const PACKAGE_JSON: &str = "package.json";

/// TypeScript config file name inside each package directory.
pub const TSCONFIG_JSON: &str = "tsconfig.json";

/// Packages migrated when no configuration overrides the list.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "packages/medusa/plugins/ai/agent",
    "packages/medusa/plugins/erp/bling",
    "packages/medusa/plugins/payment/mercadopago",
    "packages/medusa/plugins/search/neon",
    "packages/analytics",
    "packages/logger",
    "packages/utils",
];

/// Immutable, ordered list of package directories relative to the repo root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageList {
    dirs: Vec<PathBuf>,
}

impl PackageList {
    /// Create a list from directory paths, keeping their order.
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in package list.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_PACKAGES.iter().copied())
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Iterate over the package directories in order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }
}

impl Default for PackageList {
    fn default() -> Self {
        Self::builtin()
    }
}
