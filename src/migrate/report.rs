//! Trace output and run bookkeeping shared by both procedures.

use std::fmt;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{ModshiftError, Result};
use crate::package::{write_json, DEFAULT_INDENT};

/// Options shared by both procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Indentation width for rewritten documents.
    pub indent: usize,
    /// Report changes without writing files.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            dry_run: false,
        }
    }
}

/// Counters collected over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Package directories visited.
    pub packages: usize,
    /// Files written (or that would be written on a dry run).
    pub written: usize,
    /// Files skipped because they could not be parsed.
    pub skipped: usize,
    /// Warnings emitted.
    pub warnings: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) written, {} skipped, {} warning(s)",
            self.written, self.skipped, self.warnings
        )
    }
}

/// Writes trace lines and files, counting as it goes.
pub(crate) struct Reporter<'a, W: Write> {
    out: &'a mut W,
    options: RunOptions,
    summary: RunSummary,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub(crate) fn new(out: &'a mut W, options: RunOptions) -> Self {
        Self {
            out,
            options,
            summary: RunSummary::default(),
        }
    }

    /// Emit one trace line.
    pub(crate) fn line(&mut self, message: impl fmt::Display) -> Result<()> {
        writeln!(self.out, "{message}").map_err(ModshiftError::Output)
    }

    pub(crate) fn warning(&mut self, message: impl fmt::Display) -> Result<()> {
        self.summary.warnings += 1;
        self.line(message)
    }

    pub(crate) fn skipped(&mut self, message: impl fmt::Display) -> Result<()> {
        self.summary.skipped += 1;
        self.line(message)
    }

    pub(crate) fn package_visited(&mut self) {
        self.summary.packages += 1;
    }

    /// Overwrite `path` with `value`, unless this is a dry run.
    pub(crate) fn write(&mut self, path: &Path, value: &Value) -> Result<()> {
        if self.options.dry_run {
            debug!(path = %path.display(), "dry run, not writing");
        } else {
            write_json(path, value, self.options.indent)?;
        }
        self.summary.written += 1;
        Ok(())
    }

    pub(crate) fn finish(self) -> RunSummary {
        self.summary
    }
}
