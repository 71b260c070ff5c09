//! schemadoc CLI - JSON Schema to HTML reference pages
//!
//! This is the main entry point for the schemadoc CLI application,
//! providing commands for rendering single schema files and building
//! whole documentation trees with navigation.

mod cli;
mod error;
mod handlers;
mod logging;

use cli::{Cli, Commands};
use colored::control;
use error::Result;
use logging::LoggingConfig;
use std::process;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    let log_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    if let Err(e) = logging::init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    let quiet = cli.quiet;
    match cli.command {
        Commands::Render(args) => handlers::handle_render(args, quiet),
        Commands::Build(args) => handlers::handle_build(args, quiet),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}
