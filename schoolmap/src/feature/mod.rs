//! Record-to-marker projection
//!
//! Converts [`School`] records into renderable map markers with a fixed
//! visual encoding: a circular glyph with the school name as a label.
//! Projection is pure and total — every record yields a marker, and the
//! engine-coordinate transform is deterministic.

use std::sync::Arc;

use crate::coord::{lon_lat_to_mercator, GeoBounds, MercatorPoint};
use crate::school::School;

/// Glyph radius in pixels.
pub const MARKER_RADIUS_PX: f64 = 6.0;

/// Glyph fill color.
pub const MARKER_FILL: &str = "#007bff";

/// Glyph stroke color.
pub const MARKER_STROKE: &str = "#ffffff";

/// Glyph stroke width in pixels.
pub const MARKER_STROKE_WIDTH_PX: f64 = 2.0;

/// Vertical label offset in pixels (negative is above the glyph).
pub const LABEL_OFFSET_Y_PX: f64 = -15.0;

/// Label font.
pub const LABEL_FONT: &str = "12px Calibri,sans-serif";

/// Fixed visual encoding for school markers.
///
/// Every marker carries the same style; only position and label vary.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius_px: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width_px: f64,
    pub label_offset_y_px: f64,
    pub label_font: &'static str,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius_px: MARKER_RADIUS_PX,
            fill: MARKER_FILL,
            stroke: MARKER_STROKE,
            stroke_width_px: MARKER_STROKE_WIDTH_PX,
            label_offset_y_px: LABEL_OFFSET_Y_PX,
            label_font: LABEL_FONT,
        }
    }
}

/// A renderable map entity derived from a school record.
///
/// Carries a back-reference to the originating record so that a hit-tested
/// marker can recover full detail without a second fetch.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Position on the Web Mercator plane (engine coordinates).
    pub position: MercatorPoint,
    /// Label text (the record's display name).
    pub label: String,
    /// Visual encoding of the glyph.
    pub style: MarkerStyle,
    /// The originating record.
    pub record: Arc<School>,
}

impl Marker {
    /// Project a single record into a marker.
    pub fn from_record(record: Arc<School>) -> Self {
        let position = lon_lat_to_mercator(record.longitude, record.latitude);
        Self {
            position,
            label: record.name.clone(),
            style: MarkerStyle::default(),
            record,
        }
    }
}

/// Project a record set into markers, preserving order.
///
/// Pure and total: records with out-of-range coordinates still project (the
/// Mercator transform clamps latitude); supplying valid WGS84 degrees is the
/// data source's responsibility.
pub fn project(records: &[Arc<School>]) -> Vec<Marker> {
    records.iter().cloned().map(Marker::from_record).collect()
}

/// Geographic extent of a record set, `None` when empty.
///
/// The view-fit after a successful fetch targets this extent.
pub fn bounds(records: &[Arc<School>]) -> Option<GeoBounds> {
    let mut iter = records.iter();
    let first = iter.next()?;
    let mut bounds = GeoBounds::from_point(first.latitude, first.longitude);
    for record in iter {
        bounds.expand(record.latitude, record.longitude);
    }
    Some(bounds)
}
