//! Configuration module for modshift.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI `--config <path>` (highest priority)
//! - Project-level `.modshiftrc.toml`
//! - User-level `~/.config/modshift/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config};
pub use types::{Config, OutputConfig, PackagesConfig};
