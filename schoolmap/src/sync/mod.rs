//! Pagination-synchronized map state
//!
//! [`MapSyncController`] owns the authoritative pagination state and the
//! live result set, and keeps the rendered marker set consistent with them.
//! Every page change issues exactly one fetch; completions are matched
//! against a monotonically increasing generation token so that a stale
//! response can never overwrite a newer page (last-requested-page-wins,
//! not last-to-resolve).
//!
//! The controller is a plain state machine driven by `&mut self` event
//! methods; the async fetch itself lives with the caller (see
//! [`crate::session`]), which keeps the supersede rule directly testable.

use std::sync::Arc;

use tracing::debug;

use crate::api::{FetchError, ResultSet};
use crate::engine::{FitOptions, MapEngine};
use crate::feature;
use crate::school::School;

/// Fetch lifecycle state.
///
/// Mutually exclusive: while a fetch is in flight the status is `Loading`
/// even if the previous fetch failed. The prior error message remains
/// readable through [`MapSyncController::view`] until the new fetch
/// resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    /// No fetch in flight, last fetch (if any) succeeded.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// No fetch in flight, last fetch failed.
    Error(String),
}

/// Authoritative pagination state.
///
/// `total` comes from the last successful fetch. Out-of-range pages are
/// prevented by disabling navigation, never by silently rewriting `page`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageState {
    /// Current 1-based page.
    pub page: u32,
    /// Records per page.
    pub page_size: u32,
    /// Total records across all pages, from the last successful fetch.
    pub total: u64,
}

impl PageState {
    /// Total number of pages; zero when the dataset is empty.
    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.page_size as u64) as u32
    }

    /// True when a later page exists.
    pub fn has_next(&self) -> bool {
        (self.page as u64) * (self.page_size as u64) < self.total
    }

    /// True when an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Handle for one issued fetch.
///
/// Created by a page-change event and handed back on completion. The
/// generation token identifies which request a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchRequest {
    /// Request generation; newer page changes carry higher values.
    pub generation: u64,
    /// Page to fetch.
    pub page: u32,
    /// Records per page.
    pub page_size: u32,
}

/// What a completion did to the controller state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Completion {
    /// The result set was applied and pushed to the engine.
    Replaced,
    /// The fetch failed; the error is surfaced, prior data preserved.
    Failed,
    /// A newer request was issued meanwhile; the result was discarded.
    Superseded,
}

/// Read-only pagination state for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationView {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
    pub loading: bool,
    /// Last fetch error; retained while a retry is loading.
    pub error: Option<String>,
    pub can_previous: bool,
    pub can_next: bool,
}

/// State machine tying pagination to the rendered marker set.
pub struct MapSyncController {
    state: PageState,
    loading: bool,
    error: Option<String>,
    records: Vec<Arc<School>>,
    generation: u64,
    fit: FitOptions,
}

impl MapSyncController {
    /// Create a controller at page 1 with an unknown total.
    pub fn new(page_size: u32) -> Self {
        Self::with_fit_options(page_size, FitOptions::default())
    }

    /// Create a controller with custom view-fit options.
    pub fn with_fit_options(page_size: u32, fit: FitOptions) -> Self {
        debug_assert!(page_size >= 1);
        Self {
            state: PageState {
                page: 1,
                page_size,
                total: 0,
            },
            loading: false,
            error: None,
            records: Vec::new(),
            generation: 0,
            fit,
        }
    }

    /// Handle a page change (including the initial mount).
    ///
    /// Transitions to Loading, leaves any prior error readable until the
    /// fetch resolves, and returns the single [`FetchRequest`] the caller
    /// must issue for this event.
    pub fn page_changed(&mut self, page: u32) -> FetchRequest {
        debug_assert!(page >= 1);
        self.state.page = page;
        self.loading = true;
        self.generation += 1;
        debug!(page, generation = self.generation, "page changed, issuing fetch");
        FetchRequest {
            generation: self.generation,
            page,
            page_size: self.state.page_size,
        }
    }

    /// Navigate forward one page.
    ///
    /// No-op at the last page and while a fetch is loading (prevents
    /// request storms from rapid clicking).
    pub fn next_page(&mut self) -> Option<FetchRequest> {
        if self.loading || !self.state.has_next() {
            return None;
        }
        Some(self.page_changed(self.state.page + 1))
    }

    /// Navigate back one page.
    ///
    /// No-op at page 1 and while a fetch is loading.
    pub fn previous_page(&mut self) -> Option<FetchRequest> {
        if self.loading || !self.state.has_previous() {
            return None;
        }
        Some(self.page_changed(self.state.page - 1))
    }

    /// Apply the outcome of a fetch.
    ///
    /// A completion whose generation is not the current one belongs to a
    /// superseded request and is discarded without touching any state.
    /// On success the result set fully replaces the previous one, markers
    /// are re-projected and pushed to the engine, and the view is fitted to
    /// their extent (skipped when the page is empty, retaining the previous
    /// view). On failure the error becomes readable state while the prior
    /// records stay rendered.
    pub fn complete_fetch<E: MapEngine>(
        &mut self,
        engine: &mut E,
        request: &FetchRequest,
        outcome: Result<ResultSet, FetchError>,
    ) -> Completion {
        if request.generation != self.generation {
            debug!(
                stale_generation = request.generation,
                current_generation = self.generation,
                page = request.page,
                "discarding superseded fetch result"
            );
            return Completion::Superseded;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                self.state.total = result.total;
                self.error = None;
                self.records = result.schools.into_iter().map(Arc::new).collect();

                let markers = feature::project(&self.records);
                debug!(
                    page = request.page,
                    markers = markers.len(),
                    total = self.state.total,
                    "applying fetched page"
                );
                engine.replace_markers(markers);
                if let Some(bounds) = feature::bounds(&self.records) {
                    engine.fit_bounds(bounds, &self.fit);
                }
                Completion::Replaced
            }
            Err(e) => {
                let message = e.to_string();
                debug!(page = request.page, error = %message, "fetch failed");
                self.error = Some(message);
                Completion::Failed
            }
        }
    }

    /// Current fetch status.
    pub fn status(&self) -> FetchStatus {
        if self.loading {
            FetchStatus::Loading
        } else if let Some(message) = &self.error {
            FetchStatus::Error(message.clone())
        } else {
            FetchStatus::Idle
        }
    }

    /// Records of the current result set.
    pub fn records(&self) -> &[Arc<School>] {
        &self.records
    }

    /// Current page state.
    pub fn page_state(&self) -> PageState {
        self.state
    }

    /// Read-only view state for the presentation layer.
    ///
    /// Navigation flags account for loading, matching the no-op guards on
    /// [`Self::next_page`] / [`Self::previous_page`].
    pub fn view(&self) -> PaginationView {
        PaginationView {
            page: self.state.page,
            page_size: self.state.page_size,
            total: self.state.total,
            total_pages: self.state.total_pages(),
            loading: self.loading,
            error: self.error.clone(),
            can_previous: !self.loading && self.state.has_previous(),
            can_next: !self.loading && self.state.has_next(),
        }
    }
}
