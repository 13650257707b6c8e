//! Map session lifecycle
//!
//! [`MapSession`] composes a schools source, a map engine and the two
//! controllers into one object with an explicit lifecycle:
//! `initialize` → events (`load_initial`, `next_page`, `previous_page`,
//! `handle_click`) → `dispose`. There is no module-level state, so several
//! sessions (or test harnesses) can coexist in one process.
//!
//! All state mutation happens inside `&mut self` event methods: the model
//! is single-threaded and cooperative, and the only suspension point is
//! the page fetch itself.

use tracing::info;

use crate::api::SchoolsApi;
use crate::coord::ScreenPoint;
use crate::engine::{FitOptions, MapEngine};
use crate::school::School;
use crate::selection::{Selection, SelectionController};
use crate::sync::{Completion, FetchRequest, MapSyncController, PaginationView};
use std::sync::Arc;

/// Default page size, matching the server's maximum.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Records per page.
    pub page_size: u32,

    /// View-fit padding and zoom ceiling.
    pub fit: FitOptions,

    /// Clear the selection when a page change drops the selected record
    /// from the result set. When false, the overlay stays open for a record
    /// that is no longer rendered.
    pub clear_missing_selection: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            fit: FitOptions::default(),
            clear_missing_selection: true,
        }
    }
}

impl SessionConfig {
    /// Set the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the view-fit options.
    pub fn with_fit(mut self, fit: FitOptions) -> Self {
        self.fit = fit;
        self
    }

    /// Keep a selection open even when its record leaves the result set.
    pub fn keep_missing_selection(mut self) -> Self {
        self.clear_missing_selection = false;
        self
    }
}

/// Read-only view state handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct MapViewState {
    /// Pagination state and navigation flags.
    pub pagination: PaginationView,
    /// The currently selected record and its overlay anchor, if any.
    pub selected: Option<Selection>,
}

/// One live map instance: schools source + engine + controllers.
pub struct MapSession<A: SchoolsApi, E: MapEngine> {
    api: A,
    engine: E,
    sync: MapSyncController,
    selection: SelectionController,
    clear_missing_selection: bool,
}

impl<A: SchoolsApi, E: MapEngine> MapSession<A, E> {
    /// Create a session bound to a schools source and an engine handle.
    ///
    /// No fetch is issued yet; call [`Self::load_initial`] to populate the
    /// first page.
    pub fn initialize(api: A, engine: E, config: SessionConfig) -> Self {
        info!(
            page_size = config.page_size,
            clear_missing_selection = config.clear_missing_selection,
            "map session initialized"
        );
        Self {
            api,
            engine,
            sync: MapSyncController::with_fit_options(config.page_size, config.fit),
            selection: SelectionController::new(),
            clear_missing_selection: config.clear_missing_selection,
        }
    }

    /// Load the current page (the initial mount, or a retry of a failed
    /// page — retrying is just fetching the same page again).
    pub async fn load_current_page(&mut self) {
        let request = self.sync.page_changed(self.sync.page_state().page);
        self.run_fetch(request).await;
    }

    /// Load the first page. Alias for the initial mount.
    pub async fn load_initial(&mut self) {
        self.load_current_page().await;
    }

    /// Navigate forward one page. Returns false when the navigation was a
    /// no-op (last page, or a fetch already in flight).
    pub async fn next_page(&mut self) -> bool {
        match self.sync.next_page() {
            Some(request) => {
                self.run_fetch(request).await;
                true
            }
            None => false,
        }
    }

    /// Navigate back one page. Returns false when the navigation was a
    /// no-op (first page, or a fetch already in flight).
    pub async fn previous_page(&mut self) -> bool {
        match self.sync.previous_page() {
            Some(request) => {
                self.run_fetch(request).await;
                true
            }
            None => false,
        }
    }

    async fn run_fetch(&mut self, request: FetchRequest) {
        let outcome = self.api.fetch_page(request.page, request.page_size).await;
        let completion = self.sync.complete_fetch(&mut self.engine, &request, outcome);
        if completion == Completion::Replaced && self.clear_missing_selection {
            self.selection
                .retain_present(&mut self.engine, self.sync.records());
        }
    }

    /// Route a click: a marker hit selects its record, an empty-area click
    /// clears the selection.
    pub fn handle_click(&mut self, point: ScreenPoint) {
        match self.engine.hit_test(point) {
            Some(hit) => self
                .selection
                .on_marker_hit(&mut self.engine, hit.record, hit.anchor),
            None => self.selection.on_empty_area_click(&mut self.engine),
        }
    }

    /// Read-only view state for the presentation layer.
    pub fn view(&self) -> MapViewState {
        MapViewState {
            pagination: self.sync.view(),
            selected: self.selection.selection().cloned(),
        }
    }

    /// Records of the current result set.
    pub fn records(&self) -> &[Arc<School>] {
        self.sync.records()
    }

    /// The engine handle, for inspection.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Tear the session down, clearing everything it drew, and give the
    /// engine handle back to the caller.
    pub fn dispose(mut self) -> E {
        self.engine.replace_markers(Vec::new());
        self.engine.hide_overlay();
        info!("map session disposed");
        self.engine
    }
}
