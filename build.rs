//! Build script for modshift.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "modshift")]
#[command(
    author,
    version,
    about = "Migrate monorepo packages between ESM, CommonJS and NodeNext module settings"
)]
#[command(
    long_about = "modshift rewrites package.json and tsconfig.json across a list of package \
    directories.\n\n\
    'modshift convert' moves every package to CommonJS output in dist/. \
    'modshift verify' checks module and moduleResolution against NodeNext and \
    fixes only what deviates."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Repository root (default: current directory)
    #[arg(short = 'C', long, value_name = "PATH", global = true)]
    root: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    no_config: bool,

    /// Report changes without writing files
    #[arg(short, long, global = true)]
    dry_run: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert packages to CommonJS (package.json + tsconfig.json)
    Convert,
    /// Check packages against NodeNext and fix deviations
    Verify,
    /// Print an example configuration file
    ExampleConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("MODSHIFT_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("Failed to generate man page");

    let man_path = out_dir.join("modshift.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("modshift.1"));
        }
    }
}
