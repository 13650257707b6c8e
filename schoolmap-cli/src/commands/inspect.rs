//! Inspect command - summarize a local GeoJSON export.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use console::style;
use schoolmap::feature;
use schoolmap::geojson::load_schools;
use tracing::info;

use crate::error::CliError;

/// Arguments for the inspect command.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Path to a GeoJSON FeatureCollection of schools
    pub path: PathBuf,

    /// How many sample records to print
    #[arg(long, default_value_t = 5)]
    pub sample: usize,
}

/// Run the inspect command.
pub fn run(args: InspectArgs) -> Result<(), CliError> {
    let schools = load_schools(&args.path)?;
    info!(
        path = %args.path.display(),
        records = schools.len(),
        "dataset inspected"
    );
    let records: Vec<Arc<_>> = schools.into_iter().map(Arc::new).collect();

    println!(
        "{} {}",
        style("file:").cyan().bold(),
        args.path.display()
    );
    println!("  records: {}", records.len());

    match feature::bounds(&records) {
        Some(bounds) => {
            let (lat, lon) = bounds.center();
            println!(
                "  extent:  lat [{:.4}, {:.4}]  lon [{:.4}, {:.4}]",
                bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
            );
            println!("  center:  ({:.4}, {:.4})", lat, lon);
        }
        None => println!("  extent:  (empty dataset)"),
    }

    if args.sample > 0 && !records.is_empty() {
        println!();
        println!("{}", style("sample:").cyan().bold());
        for school in records.iter().take(args.sample) {
            println!(
                "  {:>6}  {}  ({:.5}, {:.5})",
                school.id, school.name, school.latitude, school.longitude
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"objectid": 1, "name": "Lincoln Elementary"},
                "geometry": {"type": "Point", "coordinates": [-89.6501, 39.7817]}
            },
            {
                "type": "Feature",
                "properties": {"objectid": 2, "name": "Washington High"},
                "geometry": {"type": "Point", "coordinates": [-74.006, 40.7128]}
            }
        ]
    }"#;

    #[test]
    fn test_inspect_valid_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let args = InspectArgs {
            path: file.path().to_path_buf(),
            sample: 2,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_inspect_missing_file_is_an_error() {
        let args = InspectArgs {
            path: PathBuf::from("/nonexistent/schools.geojson"),
            sample: 5,
        };
        assert!(matches!(run(args), Err(CliError::GeoJson(_))));
    }
}
