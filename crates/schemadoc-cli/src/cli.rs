//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// schemadoc - JSON Schema to HTML reference pages
///
/// Converts JSON Schema documents into linked HTML reference pages,
/// either one file at a time or as a whole directory tree with
/// generated navigation.
#[derive(Parser, Debug)]
#[command(
    name = "schemadoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single JSON Schema file to an HTML page
    Render(RenderArgs),

    /// Build HTML pages for every schema under a directory
    Build(BuildArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the JSON Schema file
    #[arg(value_name = "SCHEMA")]
    pub input: PathBuf,

    /// Output file path (defaults to <stem>.html)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// HTML fragment prepended to the page
    #[arg(long, value_name = "FILE")]
    pub header: Option<PathBuf>,

    /// HTML fragment appended to the page
    #[arg(long, value_name = "FILE")]
    pub footer: Option<PathBuf>,

    /// Print the page to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Directory containing JSON Schema files
    #[arg(value_name = "INPUT_DIR")]
    pub input: PathBuf,

    /// Output directory (defaults to <INPUT_DIR>/md)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Header template, doctree tags are expanded into navigation
    #[arg(long, value_name = "FILE")]
    pub header: Option<PathBuf>,

    /// Footer template, doctree tags are expanded into navigation
    #[arg(long, value_name = "FILE")]
    pub footer: Option<PathBuf>,

    /// Index page template, emitted as index.html
    #[arg(long, value_name = "FILE")]
    pub index: Option<PathBuf>,

    /// Walk and convert without writing any files
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        use is_terminal::IsTerminal;
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
