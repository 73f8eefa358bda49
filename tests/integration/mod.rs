//! Integration tests for modshift.
//!
//! This module contains integration tests organized by feature:
//!
//! - `fixtures` - Test helpers for creating temporary repositories
//! - `cli_tests` - CLI interface tests
//! - `config_tests` - Configuration file tests driven through the binary
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod config_tests;
pub mod fixtures;
pub mod snapshot_tests;
