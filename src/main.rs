//! modshift - module settings migration
//!
//! Entry point for the modshift CLI application.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

use modshift::cli::{Cli, Command};
use modshift::config::{generate_example_config, load_config, Config};
use modshift::error::{exit_code, ModshiftError};
use modshift::migrate::{convert_packages, verify_packages, RunOptions, RunSummary};
use modshift::utils::{global_config_file, local_config_file, resolve_root};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Check if it's one of our custom errors with good formatting
            if let Some(modshift_err) = err.downcast_ref::<ModshiftError>() {
                eprintln!("Error: {err:#}");
                return ExitCode::from(modshift_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    init_logging(cli.debug);
    debug!("CLI arguments = {cli:?}");

    let command = match cli.command {
        Some(Command::ExampleConfig) => {
            print!("{}", generate_example_config());
            return Ok(exit_code::SUCCESS);
        }
        Some(command) => command,
        None => {
            Cli::print_help();
            return Ok(exit_code::GENERAL_ERROR);
        }
    };

    let root = resolve_root(cli.root.as_deref()).context("Failed to find repository root")?;
    debug!("Repository root = {}", root.display());
    if cli.debug {
        log_config_paths(&root);
    }

    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref(), &root)?
    };

    let packages = config.package_list();
    let options = RunOptions {
        indent: config.indent(),
        dry_run: cli.dry_run,
    };
    debug!("Packages = {packages:?}, options = {options:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match command {
        Command::Convert => convert_packages(&root, &packages, &options, &mut out)?,
        Command::Verify => verify_packages(&root, &packages, &options, &mut out)?,
        Command::ExampleConfig => return Ok(exit_code::SUCCESS),
    };

    report_summary(&summary, cli.dry_run);
    Ok(exit_code::SUCCESS)
}

/// Install the stderr log subscriber.
fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Log where config files are looked up.
fn log_config_paths(root: &Path) {
    match global_config_file() {
        Some(cfg) => debug!(
            "Global config: {} (exists: {})",
            cfg.display(),
            cfg.exists()
        ),
        None => debug!("Global config: <not available>"),
    }

    match local_config_file(root) {
        Some(cfg) => debug!("Local config: {} (exists: true)", cfg.display()),
        None => debug!("Local config: <none in {}>", root.display()),
    }
}

fn report_summary(summary: &RunSummary, dry_run: bool) {
    info!(
        packages = summary.packages,
        written = summary.written,
        skipped = summary.skipped,
        warnings = summary.warnings,
        "run complete"
    );

    if dry_run {
        eprintln!("Dry run: {summary} (nothing was written)");
    } else {
        eprintln!("{summary}");
    }
}
