//! CLI argument definitions for modshift.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use modshift::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Root: {:?}", cli.root);
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

/// Migrate monorepo packages between ESM, CommonJS and NodeNext module settings.
#[derive(Parser, Debug)]
#[command(name = "modshift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Repository root (default: current directory)
    #[arg(short = 'C', long, value_name = "PATH", global = true)]
    pub root: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Report changes without writing files
    #[arg(short, long, global = true)]
    pub dry_run: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Procedures modshift can run.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Convert packages to CommonJS (package.json + tsconfig.json)
    Convert,
    /// Check packages against NodeNext and fix deviations
    Verify,
    /// Print an example configuration file
    ExampleConfig,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Print help to stderr.
    pub fn print_help() {
        let help = Cli::command().render_help();
        eprintln!("{help}");
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "modshift", &mut std::io::stdout());
    }
}
