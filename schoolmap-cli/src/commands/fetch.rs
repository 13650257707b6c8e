//! Fetch command - pull one page of schools from a live API.

use clap::Args;
use console::style;
use schoolmap::api::{HttpSchoolsApi, ReqwestClient, SchoolsApi};
use schoolmap::feature;
use std::sync::Arc;
use tracing::info;

use crate::error::CliError;

/// Arguments for the fetch command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Base URL of the schools API, e.g. http://localhost:4000
    pub base_url: String,

    /// Page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Records per page
    #[arg(long, default_value_t = 100)]
    pub page_size: u32,
}

/// Run the fetch command.
pub async fn run(args: FetchArgs) -> Result<(), CliError> {
    info!(
        base_url = %args.base_url,
        page = args.page,
        page_size = args.page_size,
        "fetch command started"
    );
    let client = ReqwestClient::new()?;
    let api = HttpSchoolsApi::new(&args.base_url, client);

    let result = api.fetch_page(args.page, args.page_size).await?;
    let total_pages = (result.total as f64 / args.page_size as f64).ceil() as u64;

    println!(
        "{} page {} of {} ({} records, {} total)",
        style("schools").cyan().bold(),
        args.page,
        total_pages.max(1),
        result.len(),
        result.total
    );

    let records: Vec<Arc<_>> = result.schools.into_iter().map(Arc::new).collect();
    if let Some(bounds) = feature::bounds(&records) {
        let (lat, lon) = bounds.center();
        println!(
            "  extent: lat [{:.4}, {:.4}]  lon [{:.4}, {:.4}]  center ({:.4}, {:.4})",
            bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon, lat, lon
        );
    }
    println!();

    for school in &records {
        println!(
            "  {:>6}  {}  ({:.5}, {:.5})",
            school.id,
            style(&school.name).bold(),
            school.latitude,
            school.longitude
        );
        let address = school.address_line();
        if !address.is_empty() {
            println!("          {}", style(address).dim());
        }
    }

    Ok(())
}
