//! In-memory schools source for local datasets.

use crate::school::School;

use super::fetcher::SchoolsApi;
use super::types::{FetchError, ResultSet};

/// Schools source backed by an in-memory dataset.
///
/// Serves pages from an id-ordered record list with the same offset/limit
/// semantics as the server repository: page `p` covers records
/// `[(p-1)*page_size, p*page_size)` and `total` is the full dataset size.
/// Useful for headless runs and tests that exercise the full controller
/// stack without a server.
pub struct LocalSchoolsApi {
    schools: Vec<School>,
}

impl LocalSchoolsApi {
    /// Creates a local source from a record list.
    ///
    /// Records are sorted by id so page boundaries are stable across calls.
    pub fn new(mut schools: Vec<School>) -> Self {
        schools.sort_by_key(|s| s.id);
        Self { schools }
    }

    /// Total number of records in the dataset.
    pub fn len(&self) -> usize {
        self.schools.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }
}

impl SchoolsApi for LocalSchoolsApi {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<ResultSet, FetchError> {
        if page < 1 || page_size < 1 {
            return Err(FetchError::InvalidRequest { page, page_size });
        }

        let offset = (page as usize - 1).saturating_mul(page_size as usize);
        let schools: Vec<School> = self
            .schools
            .iter()
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok(ResultSet {
            schools,
            total: self.schools.len() as u64,
        })
    }
}
