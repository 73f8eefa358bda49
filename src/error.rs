//! Custom error types for modshift.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for modshift.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// A package.json could not be parsed.
    pub const INVALID_MANIFEST: i32 = 2;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
}

/// Main error type for modshift.
#[derive(Error, Debug)]
pub enum ModshiftError {
    /// Failed to parse package.json with location details.
    #[error("Failed to parse package.json at {path}:\n  {message}")]
    ManifestParse {
        path: PathBuf,
        message: String,
        line: usize,
        column: usize,
    },

    /// package.json parsed, but is not a JSON object.
    #[error("Invalid package.json at {path}: expected an object, got {actual_type}")]
    InvalidManifest { path: PathBuf, actual_type: String },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a trace line to the output stream failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// JSON serialization error.
    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ModshiftError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ModshiftError::ManifestParse { .. } => exit_code::INVALID_MANIFEST,
            ModshiftError::InvalidManifest { .. } => exit_code::INVALID_MANIFEST,
            ModshiftError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            ModshiftError::IoWithContext { .. } => exit_code::GENERAL_ERROR,
            ModshiftError::Output(_) => exit_code::GENERAL_ERROR,
            ModshiftError::Serialize(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Wrap an IO error with the operation and path it failed on.
    pub fn io(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        ModshiftError::IoWithContext {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}

/// Name the JSON type of a value, for error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Result type alias for modshift operations.
pub type Result<T> = std::result::Result<T, ModshiftError>;
