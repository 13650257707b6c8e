//! Paginated fetch contract and its HTTP implementation.

use tracing::debug;

use super::http::AsyncHttpClient;
use super::types::{FetchError, ResultSet, SchoolsResponse};

/// Contract for a paginated school data source.
///
/// `fetch_page` is single-flight per call site: the caller issues one fetch
/// at a time and decides what to do with stale completions. Retrying is the
/// caller's responsibility, by invoking again with the same arguments.
pub trait SchoolsApi: Send + Sync {
    /// Fetch one page of schools.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number (must be >= 1)
    /// * `page_size` - records per page (must be >= 1)
    fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl std::future::Future<Output = Result<ResultSet, FetchError>> + Send;
}

/// Schools API client over HTTP.
///
/// Issues `GET {base}/api/schools?page={page}&pageSize={pageSize}` and
/// decodes the JSON envelope into a [`ResultSet`].
pub struct HttpSchoolsApi<C: AsyncHttpClient> {
    base_url: String,
    http_client: C,
}

impl<C: AsyncHttpClient> HttpSchoolsApi<C> {
    /// Creates a new API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Server base URL, e.g. `http://localhost:8080`
    /// * `http_client` - HTTP client for making requests
    pub fn new(base_url: impl Into<String>, http_client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client,
        }
    }

    /// Builds the request URL for the given page.
    fn build_url(&self, page: u32, page_size: u32) -> String {
        format!(
            "{}/api/schools?page={}&pageSize={}",
            self.base_url, page, page_size
        )
    }
}

impl<C: AsyncHttpClient> SchoolsApi for HttpSchoolsApi<C> {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<ResultSet, FetchError> {
        if page < 1 || page_size < 1 {
            return Err(FetchError::InvalidRequest { page, page_size });
        }

        let url = self.build_url(page, page_size);
        debug!(page, page_size, %url, "fetching schools page");

        let body = self.http_client.get(&url).await?;
        let response: SchoolsResponse = serde_json::from_slice(&body)
            .map_err(|e| FetchError::Decode(format!("{}", e)))?;

        debug!(
            page,
            records = response.schools.len(),
            total = response.total,
            "schools page fetched"
        );
        Ok(response.into())
    }
}
