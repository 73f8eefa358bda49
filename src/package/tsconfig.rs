//! tsconfig.json handling.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::json_type_name;

const COMPILER_OPTIONS: &str = "compilerOptions";

/// Why a tsconfig.json was skipped.
///
/// Unlike a broken package.json this never aborts a run; callers report it
/// and move on to the next package.
#[derive(Error, Debug)]
pub enum TsconfigParseError {
    /// Not strict JSON (tsconfig files often carry comments).
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The document is valid JSON but not an object.
    #[error("expected an object, got {0}")]
    NotAnObject(&'static str),

    /// `compilerOptions` is present but not an object.
    #[error("compilerOptions must be an object, got {0}")]
    InvalidCompilerOptions(&'static str),
}

/// A parsed tsconfig.json.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsConfig {
    root: Map<String, Value>,
    compiler_options: Map<String, Value>,
}

impl TsConfig {
    /// Parse tsconfig.json content.
    ///
    /// Takes raw bytes so that invalid UTF-8 is a [`TsconfigParseError::Syntax`]
    /// like any other malformed document.
    ///
    /// # Errors
    ///
    /// Returns a [`TsconfigParseError`] if the content is not a JSON object
    /// or its `compilerOptions` is not an object.
    pub fn parse(content: impl AsRef<[u8]>) -> Result<Self, TsconfigParseError> {
        let mut root = match serde_json::from_slice::<Value>(content.as_ref())? {
            Value::Object(root) => root,
            other => return Err(TsconfigParseError::NotAnObject(json_type_name(&other))),
        };

        // Leave an empty placeholder behind so the key keeps its position.
        let compiler_options = match root.get_mut(COMPILER_OPTIONS) {
            None => Map::new(),
            Some(Value::Object(options)) => std::mem::take(options),
            Some(other) => {
                return Err(TsconfigParseError::InvalidCompilerOptions(
                    json_type_name(other),
                ))
            }
        };

        Ok(Self {
            root,
            compiler_options,
        })
    }

    /// Get a compiler option.
    pub fn compiler_option(&self, key: &str) -> Option<&Value> {
        self.compiler_options.get(key)
    }

    /// Get a compiler option if it is a string.
    pub fn compiler_option_str(&self, key: &str) -> Option<&str> {
        self.compiler_option(key).and_then(Value::as_str)
    }

    /// Set a string compiler option.
    ///
    /// Returns the previous value.
    pub fn set_compiler_option(&mut self, key: &str, value: &str) -> Option<Value> {
        self.compiler_options
            .insert(key.to_string(), Value::String(value.to_string()))
    }

    /// Convert back into a JSON value for writing.
    ///
    /// `compilerOptions` is always present in the result, appended at the end
    /// when the original document had none.
    pub fn into_value(self) -> Value {
        let mut root = self.root;
        root.insert(
            COMPILER_OPTIONS.to_string(),
            Value::Object(self.compiler_options),
        );
        Value::Object(root)
    }
}

/// Describe a compiler option value for trace output.
///
/// Missing and `null` values read `None`, booleans `True`/`False`.
pub fn describe_option(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
