//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

use crate::cli::{BuildArgs, CompletionsArgs, RenderArgs};
use crate::error::{Error, Result};
use colored::Colorize;
use schemadoc_core::pipeline::{build_dir, render_file, RenderOptions};

/// Handle the render command
pub fn handle_render(args: RenderArgs, quiet: bool) -> Result<()> {
    if !args.input.exists() {
        return Err(Error::FileNotFound {
            path: args.input.clone(),
        });
    }

    let options = RenderOptions {
        write_file: !args.stdout,
        header_file: args.header,
        footer_file: args.footer,
        index_file: None,
    };

    let page = render_file(&args.input, args.output.as_deref(), &options)?;

    if args.stdout {
        println!("{page}");
    } else if !quiet {
        println!("{} {}", "✓".green(), "Page generated".bold());
    }

    Ok(())
}

/// Handle the build command
pub fn handle_build(args: BuildArgs, quiet: bool) -> Result<()> {
    if !args.input.exists() {
        return Err(Error::FileNotFound {
            path: args.input.clone(),
        });
    }

    let options = RenderOptions {
        write_file: !args.dry_run,
        header_file: args.header,
        footer_file: args.footer,
        index_file: args.index,
    };

    let report = build_dir(&args.input, args.output.as_deref(), &options)?;

    if !report.failures.is_empty() {
        eprintln!(
            "{} {} file(s) could not be converted:",
            "✗".red(),
            report.failures.len()
        );
        for (path, error) in &report.failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    if report.generated.is_empty() && !report.failures.is_empty() {
        return Err(Error::BuildFailed {
            failed: report.failures.len(),
            total: report.failures.len(),
        });
    }

    if !quiet {
        println!(
            "{} {} page(s) generated",
            "✓".green(),
            report.generated.len()
        );
    }

    Ok(())
}

/// Handle the completions command
pub fn handle_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();

    generate(
        args.shell.to_clap_shell(),
        &mut cmd,
        name,
        &mut io::stdout(),
    );

    Ok(())
}
