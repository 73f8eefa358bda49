//! Package module for modshift.
//!
//! Handles the package list, package.json and tsconfig.json parsing, the
//! `exports` rewrite, and writing documents back to disk.

pub mod document;
pub mod exports;
mod list;
mod manifest;
mod tsconfig;

pub use document::{read_bytes_if_exists, read_if_exists, to_json_string, write_json, DEFAULT_INDENT};
pub use exports::{resolve_target, rewrite_exports, rewrite_target, ExportsRewrite};
pub use list::{PackageList, DEFAULT_PACKAGES, PACKAGE_JSON, TSCONFIG_JSON};
pub use manifest::{PackageManifest, MAIN_ENTRY, TYPES_ENTRY};
pub use tsconfig::{describe_option, TsConfig, TsconfigParseError};
