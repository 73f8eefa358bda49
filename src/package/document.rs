//! Reading and writing JSON documents on disk.

use std::fs;
use std::path::Path;

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Serializer, Value};
use tracing::debug;

use crate::error::{ModshiftError, Result};

/// Default indentation width for rewritten documents.
pub const DEFAULT_INDENT: usize = 2;

/// Read a file if it exists.
///
/// Returns `Ok(None)` for a missing file so callers can skip it silently.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        debug!(path = %path.display(), "not found, skipping");
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| ModshiftError::io("read", path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read");
    Ok(Some(content))
}

/// Read a file's raw bytes if it exists.
///
/// Decoding is left to the caller, so invalid UTF-8 surfaces as a parse
/// error rather than an I/O error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_bytes_if_exists(path: &Path) -> Result<Option<Vec<u8>>> {
    if !path.exists() {
        debug!(path = %path.display(), "not found, skipping");
        return Ok(None);
    }

    let content = fs::read(path).map_err(|e| ModshiftError::io("read", path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read");
    Ok(Some(content))
}

/// Pretty printer that escapes DEL and every non-ASCII character as `\uXXXX`.
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize a value as indented JSON followed by exactly one newline.
///
/// Non-ASCII characters are written as `\uXXXX` escapes (surrogate pairs
/// outside the BMP), so output is plain ASCII.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_json_string(value: &Value, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = AsciiFormatter {
        pretty: PrettyFormatter::with_indent(indent.as_bytes()),
    };
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Overwrite a file with the serialized value.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json(path: &Path, value: &Value, indent: usize) -> Result<()> {
    let content = to_json_string(value, indent)?;
    fs::write(path, &content).map_err(|e| ModshiftError::io("write", path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote");
    Ok(())
}

/// Format a JSON parsing error with context.
pub fn format_json_error(content: &str, error: &serde_json::Error) -> String {
    let line = error.line();
    let column = error.column();

    // Try to show the problematic line
    if let Some(error_line) = content.lines().nth(line.saturating_sub(1)) {
        let pointer = " ".repeat(column.saturating_sub(1)) + "^";
        format!(
            "{}\n  at line {}, column {}:\n    {}\n    {}",
            error, line, column, error_line, pointer
        )
    } else {
        format!("{} at line {}, column {}", error, line, column)
    }
}
