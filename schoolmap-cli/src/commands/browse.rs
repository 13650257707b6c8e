//! Browse command - page through a local GeoJSON export interactively.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use console::style;
use schoolmap::api::LocalSchoolsApi;
use schoolmap::engine::RecordingMapEngine;
use schoolmap::geojson::load_schools;
use schoolmap::session::{MapSession, SessionConfig};
use tracing::info;

use crate::error::CliError;

/// Arguments for the browse command.
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Path to a GeoJSON FeatureCollection of schools
    pub path: PathBuf,

    /// Records per page
    #[arg(long, default_value_t = 100)]
    pub page_size: u32,
}

/// Run the browse command.
pub async fn run(args: BrowseArgs) -> Result<(), CliError> {
    let schools = load_schools(&args.path)?;
    info!(
        path = %args.path.display(),
        records = schools.len(),
        page_size = args.page_size,
        "browse session started"
    );
    let api = LocalSchoolsApi::new(schools);
    let config = SessionConfig::default().with_page_size(args.page_size);
    let mut session = MapSession::initialize(api, RecordingMapEngine::new(), config);

    session.load_initial().await;
    print_page(&session);

    loop {
        print!("[n]ext / [p]rev / [r]eload / [q]uit: ");
        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            break;
        }

        match input.trim() {
            "n" => {
                if !session.next_page().await {
                    println!("Already on the last page.");
                    continue;
                }
            }
            "p" => {
                if !session.previous_page().await {
                    println!("Already on the first page.");
                    continue;
                }
            }
            "r" => session.load_current_page().await,
            "q" | "" => break,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        }
        print_page(&session);
    }

    session.dispose();
    Ok(())
}

fn print_page(session: &MapSession<LocalSchoolsApi, RecordingMapEngine>) {
    let view = session.view();

    println!();
    println!(
        "{} page {} of {}  ({} records on this page, {} total)",
        style("schools").cyan().bold(),
        view.pagination.page,
        view.pagination.total_pages.max(1),
        session.records().len(),
        view.pagination.total
    );
    if let Some(error) = &view.pagination.error {
        println!("  {} {}", style("error:").red().bold(), error);
    }

    for school in session.records() {
        println!(
            "  {:>6}  {}  ({:.5}, {:.5})",
            school.id, school.name, school.latitude, school.longitude
        );
    }
    println!();
}
