//! modshift - module settings migration
//!
//! Rewrites `package.json` and `tsconfig.json` across a list of package
//! directories in a JavaScript monorepo.
//!
//! # Procedures
//!
//! - **convert**: drops `"type": "module"`, points `main`/`types`/`exports`
//!   at `dist/`, and sets `module: CommonJS`, `moduleResolution: Node`,
//!   `outDir: dist`.
//! - **verify**: enforces `module` and `moduleResolution` of `NodeNext` and
//!   the absence of `"type": "module"`, writing only what it fixes.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and result helpers
//! - [`migrate`] - The convert and verify procedures
//! - [`package`] - package.json / tsconfig.json parsing and rewriting
//! - [`utils`] - Path utilities
//!
//! # Example
//!
//! ```no_run
//! use modshift::migrate::{convert_packages, RunOptions};
//! use modshift::package::PackageList;
//! use std::path::Path;
//!
//! let mut out = std::io::stdout();
//! let summary = convert_packages(
//!     Path::new("."),
//!     &PackageList::builtin(),
//!     &RunOptions::default(),
//!     &mut out,
//! )
//! .expect("conversion failed");
//! println!("{summary}");
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// Convert and verify procedures.
pub mod migrate;

/// package.json and tsconfig.json handling.
pub mod package;

/// Path utilities.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use error::{ModshiftError, Result};
pub use migrate::{convert_packages, verify_packages, RunOptions, RunSummary};
pub use package::PackageList;
