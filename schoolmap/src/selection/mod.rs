//! Selected-record state and overlay placement
//!
//! [`SelectionController`] owns the single "currently inspected" record and
//! the screen anchor its detail overlay is pinned to. It is driven by the
//! results of explicit hit-test queries, never by engine callbacks, so it
//! can be exercised against any [`MapEngine`] double.

use std::sync::Arc;

use tracing::debug;

use crate::coord::ScreenPoint;
use crate::engine::MapEngine;
use crate::school::School;

/// The currently inspected record and its overlay anchor.
///
/// Constructed only as a pair: an anchor exists exactly when a record is
/// selected.
#[derive(Debug, Clone)]
pub struct Selection {
    /// The selected record.
    pub record: Arc<School>,
    /// Screen-space anchor the overlay tracks.
    pub anchor: ScreenPoint,
}

/// Controller for the selection lifecycle.
///
/// Only two transitions exist: a marker hit sets the selection (replacing
/// any previous one directly), and an empty-area click clears it. Page
/// changes do not pass through here; whether a selection survives a data
/// change is the session's policy.
#[derive(Debug, Default)]
pub struct SelectionController {
    selection: Option<Selection>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a record from a hit-tested marker and anchor its overlay.
    pub fn on_marker_hit<E: MapEngine>(
        &mut self,
        engine: &mut E,
        record: Arc<School>,
        anchor: ScreenPoint,
    ) {
        debug!(id = record.id, name = %record.name, "record selected");
        engine.show_overlay(anchor);
        self.selection = Some(Selection { record, anchor });
    }

    /// Clear the selection; the overlay is hidden, not destroyed.
    pub fn on_empty_area_click<E: MapEngine>(&mut self, engine: &mut E) {
        if self.selection.take().is_some() {
            debug!("selection cleared");
        }
        engine.hide_overlay();
    }

    /// Drop the selection if its record is absent from `records`.
    ///
    /// Applied after a page change when the session's policy is to not keep
    /// an overlay open for a record that is no longer displayed. Records
    /// are matched by id.
    pub fn retain_present<E: MapEngine>(&mut self, engine: &mut E, records: &[Arc<School>]) {
        let Some(selection) = &self.selection else {
            return;
        };
        let selected_id = selection.record.id;
        if records.iter().any(|r| r.id == selected_id) {
            return;
        }
        debug!(id = selected_id, "selected record left the result set, clearing");
        self.selection = None;
        engine.hide_overlay();
    }

    /// The current selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The selected record, if any.
    pub fn selected_record(&self) -> Option<&Arc<School>> {
        self.selection.as_ref().map(|s| &s.record)
    }
}
