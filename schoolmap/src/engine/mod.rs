//! Map engine capability surface
//!
//! The rendering engine (tile drawing, projection math, real hit-testing)
//! is an external collaborator. This module defines the narrow contract the
//! controllers drive it through: replace-all markers, fit-to-extent, an
//! anchored overlay, and a value-returning hit-test query.
//!
//! Keeping hit-testing as an explicit query (instead of engine-dispatched
//! click callbacks) lets the selection logic be tested against a plain
//! engine double.

use std::sync::Arc;

use crate::coord::{GeoBounds, ScreenPoint};
use crate::feature::Marker;
use crate::school::School;

/// Default view-fit padding in pixels (top, right, bottom, left).
pub const DEFAULT_FIT_PADDING_PX: [u32; 4] = [50, 50, 50, 50];

/// Default maximum zoom for view-fit.
///
/// Prevents over-zooming when the result set collapses to a single point.
pub const DEFAULT_FIT_MAX_ZOOM: u8 = 10;

/// Options for the fit-bounds operation.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Padding in pixels around the extent: top, right, bottom, left.
    pub padding_px: [u32; 4],
    /// Zoom ceiling applied after fitting.
    pub max_zoom: u8,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding_px: DEFAULT_FIT_PADDING_PX,
            max_zoom: DEFAULT_FIT_MAX_ZOOM,
        }
    }
}

/// Result of a hit-test query: the hit marker's record and the screen
/// anchor where its overlay should be placed.
#[derive(Debug, Clone)]
pub struct MarkerHit {
    /// Back-referenced record of the hit marker.
    pub record: Arc<School>,
    /// Screen-space anchor for the detail overlay.
    pub anchor: ScreenPoint,
}

/// Rendering engine contract consumed by the controllers.
///
/// Implementations own all drawing and camera state. The controllers only
/// ever write derived projections into the engine and read back hit-test
/// results; they never observe engine internals.
pub trait MapEngine {
    /// Replace the full marker set (clear-and-repaint, no diffing).
    fn replace_markers(&mut self, markers: Vec<Marker>);

    /// Fit the view to the given extent with padding and a zoom ceiling.
    fn fit_bounds(&mut self, bounds: GeoBounds, options: &FitOptions);

    /// Show the detail overlay anchored at a screen position.
    fn show_overlay(&mut self, anchor: ScreenPoint);

    /// Hide the detail overlay (kept alive for cheap reopen).
    fn hide_overlay(&mut self);

    /// Query which marker, if any, is under the given screen point.
    fn hit_test(&self, point: ScreenPoint) -> Option<MarkerHit>;
}

/// Engine that accepts every operation and renders nothing.
///
/// Useful for headless runs where only the controller state matters.
#[derive(Debug, Default)]
pub struct NoopMapEngine;

impl MapEngine for NoopMapEngine {
    fn replace_markers(&mut self, _markers: Vec<Marker>) {}
    fn fit_bounds(&mut self, _bounds: GeoBounds, _options: &FitOptions) {}
    fn show_overlay(&mut self, _anchor: ScreenPoint) {}
    fn hide_overlay(&mut self) {}
    fn hit_test(&self, _point: ScreenPoint) -> Option<MarkerHit> {
        None
    }
}

/// Engine double that records every operation.
///
/// Renders nothing, but keeps the current marker set, all fit-bounds calls
/// and the overlay state observable. Hit-testing uses an identity view
/// transform: a screen point hits a marker when it lies within the glyph
/// radius of the marker's engine-plane position, and the returned anchor is
/// the marker position itself.
#[derive(Debug, Default)]
pub struct RecordingMapEngine {
    markers: Vec<Marker>,
    fit_calls: Vec<(GeoBounds, FitOptions)>,
    overlay: Option<ScreenPoint>,
    overlay_visible: bool,
}

impl RecordingMapEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current marker set.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// All fit-bounds calls, in order.
    pub fn fit_calls(&self) -> &[(GeoBounds, FitOptions)] {
        &self.fit_calls
    }

    /// Current overlay anchor, if the overlay is visible.
    pub fn visible_overlay(&self) -> Option<ScreenPoint> {
        if self.overlay_visible {
            self.overlay
        } else {
            None
        }
    }

    /// Screen point over the marker at `index`, for driving hit tests.
    pub fn point_over_marker(&self, index: usize) -> ScreenPoint {
        let position = self.markers[index].position;
        ScreenPoint::new(position.x, position.y)
    }
}

impl MapEngine for RecordingMapEngine {
    fn replace_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, options: &FitOptions) {
        self.fit_calls.push((bounds, options.clone()));
    }

    fn show_overlay(&mut self, anchor: ScreenPoint) {
        self.overlay = Some(anchor);
        self.overlay_visible = true;
    }

    fn hide_overlay(&mut self) {
        // Overlay handle survives; only visibility changes
        self.overlay_visible = false;
    }

    fn hit_test(&self, point: ScreenPoint) -> Option<MarkerHit> {
        self.markers
            .iter()
            .find(|marker| {
                let dx = marker.position.x - point.x;
                let dy = marker.position.y - point.y;
                (dx * dx + dy * dy).sqrt() <= marker.style.radius_px
            })
            .map(|marker| MarkerHit {
                record: Arc::clone(&marker.record),
                anchor: ScreenPoint::new(marker.position.x, marker.position.y),
            })
    }
}
