//! Folio CLI - static portfolio page generator
//!
//! Usage: folio <COMMAND>
//!
//! Commands:
//!   build   Render the page to <out>/index.html
//!   check   Validate content and page anchors
//!   diff    Preview changes without writing
//!   watch   Rebuild on content changes
//!   init    Write starter config and content

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    folio::logging::init_cli_logger(cli.verbose);

    let global = commands::GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
    };

    match cli.command {
        Commands::Build {
            source,
            year,
            force,
            dry_run,
        } => commands::build::cmd_build(&global, &source, year, force, dry_run),
        Commands::Check {
            content,
            strict_warnings,
        } => commands::check::cmd_check(&global, content, strict_warnings),
        Commands::Diff { source, year } => commands::diff::cmd_diff(&global, &source, year),
        Commands::Watch { source } => commands::watch::cmd_watch(&global, &source),
        Commands::Init { path, force } => commands::init::cmd_init(&global, &path, force),
    }
}
