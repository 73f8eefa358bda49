//! Conversion of packages from ESM to CommonJS.

use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::report::{Reporter, RunOptions, RunSummary};
use crate::error::Result;
use crate::package::{
    read_bytes_if_exists, read_if_exists, rewrite_exports, ExportsRewrite, PackageList,
    PackageManifest, TsConfig, PACKAGE_JSON, TSCONFIG_JSON,
};

/// `compilerOptions.module` written by the converter.
pub const COMMONJS_MODULE: &str = "CommonJS";

/// `compilerOptions.moduleResolution` written by the converter.
pub const NODE_RESOLUTION: &str = "Node";

/// `compilerOptions.outDir` written by the converter.
pub const OUT_DIR: &str = "dist";

/// Convert every package in `packages` to CommonJS.
///
/// Each package's `package.json` and `tsconfig.json` are rewritten when
/// present; missing files are skipped without a trace. Trace lines go to
/// `out`.
///
/// # Errors
///
/// Stops at the first package.json that cannot be parsed, and on any read or
/// write failure. A tsconfig.json that cannot be parsed is reported and
/// skipped.
pub fn convert_packages<W: Write>(
    root: &Path,
    packages: &PackageList,
    options: &RunOptions,
    out: &mut W,
) -> Result<RunSummary> {
    let mut reporter = Reporter::new(out, *options);

    for package in packages.iter() {
        debug!(package = %package.display(), "converting");
        reporter.package_visited();
        convert_manifest(root, package, &mut reporter)?;
        convert_tsconfig(root, package, &mut reporter)?;
    }

    Ok(reporter.finish())
}

fn convert_manifest<W: Write>(
    root: &Path,
    package: &Path,
    reporter: &mut Reporter<'_, W>,
) -> Result<()> {
    let display_path = package.join(PACKAGE_JSON);
    let path = root.join(&display_path);
    let Some(content) = read_if_exists(&path)? else {
        return Ok(());
    };

    let mut manifest = PackageManifest::parse(&path, &content)?;
    reporter.line(format_args!("Processing {}", display_path.display()))?;
    debug!(name = %manifest, "parsed manifest");

    if manifest.remove_type().is_some() {
        reporter.line("  Removed 'type'")?;
    }

    manifest.set_entry_points();
    reporter.line("  Set main and types")?;

    if let Some(exports) = manifest.exports() {
        match rewrite_exports(exports) {
            ExportsRewrite::Redundant => {
                manifest.remove_exports();
                reporter.line("  Removed single '.' export")?;
            }
            ExportsRewrite::Simplified {
                entries,
                stray_targets,
            } => {
                for target in &stray_targets {
                    reporter.warning(format_args!(
                        "  Warning: Target {target} does not start with ./dist/"
                    ))?;
                }
                let rendered = Value::Object(entries.clone()).to_string();
                manifest.set_exports(entries);
                reporter.line(format_args!("  Simplified exports: {rendered}"))?;
            }
            ExportsRewrite::Unsupported => {
                reporter.warning(
                    "  Warning: exports is neither a string nor an object, left unchanged",
                )?;
            }
        }
    }

    reporter.write(&path, &manifest.into_value())
}

fn convert_tsconfig<W: Write>(
    root: &Path,
    package: &Path,
    reporter: &mut Reporter<'_, W>,
) -> Result<()> {
    let display_path = package.join(TSCONFIG_JSON);
    let path = root.join(&display_path);
    let Some(content) = read_bytes_if_exists(&path)? else {
        return Ok(());
    };

    let mut tsconfig = match TsConfig::parse(&content) {
        Ok(tsconfig) => tsconfig,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable tsconfig");
            return reporter.skipped(format_args!(
                "  Error reading {}, might contain comments.",
                display_path.display()
            ));
        }
    };

    reporter.line(format_args!("Processing {}", display_path.display()))?;

    tsconfig.set_compiler_option("module", COMMONJS_MODULE);
    tsconfig.set_compiler_option("moduleResolution", NODE_RESOLUTION);
    tsconfig.set_compiler_option("outDir", OUT_DIR);

    reporter.write(&path, &tsconfig.into_value())
}
