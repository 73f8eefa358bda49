//! package.json manifest handling.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

use super::document::format_json_error;
use crate::error::{json_type_name, ModshiftError, Result};

/// CommonJS entry point written by the converter.
pub const MAIN_ENTRY: &str = "dist/index.js";

/// Type declaration entry point written by the converter.
pub const TYPES_ENTRY: &str = "dist/index.d.ts";

/// A parsed package.json.
///
/// Keeps every field in its original order; only the fields touched by the
/// migration are exposed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Parse package.json content.
    ///
    /// `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or is not an object.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ModshiftError::ManifestParse {
                path: path.to_path_buf(),
                message: format_json_error(content, &e),
                line: e.line(),
                column: e.column(),
            })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ModshiftError::InvalidManifest {
                path: path.to_path_buf(),
                actual_type: json_type_name(&other).to_string(),
            }),
        }
    }

    /// Get a raw field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Check whether the package declares `"type": "module"`.
    pub fn is_module(&self) -> bool {
        self.fields.get("type").and_then(Value::as_str) == Some("module")
    }

    /// Remove the `type` field, whatever its value.
    pub fn remove_type(&mut self) -> Option<Value> {
        self.fields.shift_remove("type")
    }

    /// Point `main` and `types` at the compiled output.
    pub fn set_entry_points(&mut self) {
        self.fields
            .insert("main".to_string(), Value::String(MAIN_ENTRY.to_string()));
        self.fields
            .insert("types".to_string(), Value::String(TYPES_ENTRY.to_string()));
    }

    /// Get the `exports` field.
    pub fn exports(&self) -> Option<&Value> {
        self.fields.get("exports")
    }

    /// Replace the `exports` field in place.
    pub fn set_exports(&mut self, exports: Map<String, Value>) {
        self.fields
            .insert("exports".to_string(), Value::Object(exports));
    }

    /// Drop the `exports` field.
    pub fn remove_exports(&mut self) -> Option<Value> {
        self.fields.shift_remove("exports")
    }

    /// Convert back into a JSON value for writing.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl fmt::Display for PackageManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .fields
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("unnamed");
        write!(f, "{name}")
    }
}
