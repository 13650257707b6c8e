//! SchoolMap CLI - Command-line interface
//!
//! Drives the schoolmap library headlessly: fetch pages from a live schools
//! API, inspect a local GeoJSON export, or browse a local dataset page by
//! page through the full session pipeline.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use schoolmap::logging::{default_log_dir, default_log_file, init_logging};

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "schoolmap", version, about = "Paginated school map controller")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch one page of schools from a live API
    Fetch(commands::fetch::FetchArgs),
    /// Summarize a local GeoJSON export
    Inspect(commands::inspect::InspectArgs),
    /// Browse a local GeoJSON export page by page
    Browse(commands::browse::BrowseArgs),
}

async fn run(command: Command) -> Result<(), CliError> {
    let _guard = init_logging(default_log_dir(), default_log_file())?;

    match command {
        Command::Fetch(args) => commands::fetch::run(args).await,
        Command::Inspect(args) => commands::inspect::run(args),
        Command::Browse(args) => commands::browse::run(args).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("{} {}", console::style("error:").red().bold(), e);
        std::process::exit(1);
    }
}
