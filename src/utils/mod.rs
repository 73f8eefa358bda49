//! Utility module for modshift.
//!
//! Path helpers for locating the repository root and config files.

mod paths;

pub use paths::{
    config_dir, global_config_file, local_config_file, resolve_root, PROJECT_CONFIG_FILE,
};
