//! Schools API client abstraction
//!
//! This module provides the data-fetching seam between the map controllers
//! and the paginated Schools API: a typed [`SchoolsApi`] contract, an HTTP
//! implementation over [`AsyncHttpClient`], and an in-memory implementation
//! backed by a local dataset.
//!
//! No retry policy lives here; a failed page is retried by navigating to it
//! again.

mod fetcher;
mod http;
mod local;
mod types;

pub use fetcher::{HttpSchoolsApi, SchoolsApi};
pub use http::{AsyncHttpClient, ReqwestClient};
pub use local::LocalSchoolsApi;
pub use types::{FetchError, ResultSet, SchoolsResponse};

#[cfg(test)]
pub use http::tests::MockHttpClient;
