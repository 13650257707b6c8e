//! CLI error types.

use schoolmap::api::FetchError;
use schoolmap::geojson::GeoJsonError;
use thiserror::Error;

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Logging could not be initialized.
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] std::io::Error),

    /// A page fetch failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A GeoJSON file could not be loaded.
    #[error("failed to load GeoJSON: {0}")]
    GeoJson(#[from] GeoJsonError),
}
