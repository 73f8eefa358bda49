//! Verification of NodeNext module settings.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::report::{Reporter, RunOptions, RunSummary};
use crate::error::Result;
use crate::package::{
    describe_option, read_bytes_if_exists, read_if_exists, PackageList, PackageManifest, TsConfig,
    PACKAGE_JSON, TSCONFIG_JSON,
};

/// Value enforced for both `module` and `moduleResolution`.
pub const NODENEXT: &str = "NodeNext";

/// Check every package in `packages` and fix what deviates.
///
/// Files that already comply are reported `OK` and never rewritten.
///
/// # Errors
///
/// Stops at the first package.json that cannot be parsed, and on any read or
/// write failure. A tsconfig.json that cannot be parsed is reported and
/// skipped.
pub fn verify_packages<W: Write>(
    root: &Path,
    packages: &PackageList,
    options: &RunOptions,
    out: &mut W,
) -> Result<RunSummary> {
    let mut reporter = Reporter::new(out, *options);

    for package in packages.iter() {
        debug!(package = %package.display(), "verifying");
        reporter.package_visited();
        verify_manifest(root, package, &mut reporter)?;
        verify_tsconfig(root, package, &mut reporter)?;
    }

    Ok(reporter.finish())
}

fn verify_manifest<W: Write>(
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
    if !manifest.is_module() {
        return reporter.line(format_args!("OK: {} is CJS", display_path.display()));
    }

    reporter.line(format_args!(
        "FIXING: {} has type: module",
        display_path.display()
    ))?;
    manifest.remove_type();
    reporter.write(&path, &manifest.into_value())
}

fn verify_tsconfig<W: Write>(
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
                "SKIP: {} (invalid json or comments)",
                display_path.display()
            ));
        }
    };

    let mut changed = false;
    for option in ["module", "moduleResolution"] {
        if tsconfig.compiler_option_str(option) == Some(NODENEXT) {
            continue;
        }
        reporter.line(format_args!(
            "FIXING: {} {option} is {}",
            display_path.display(),
            describe_option(tsconfig.compiler_option(option))
        ))?;
        tsconfig.set_compiler_option(option, NODENEXT);
        changed = true;
    }

    if changed {
        reporter.write(&path, &tsconfig.into_value())
    } else {
        reporter.line(format_args!("OK: {}", display_path.display()))
    }
}
