//! Fetch result and error types.

use serde::Deserialize;
use thiserror::Error;

use crate::school::School;

/// Errors that can occur while fetching a page of schools.
///
/// Transport and decode failures are handled identically by the map core:
/// both surface as a single readable message while the previously rendered
/// data stays visible.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Network failure or non-success HTTP status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The requested page or page size is out of contract (both must be >= 1).
    #[error("invalid page request: page {page}, pageSize {page_size}")]
    InvalidRequest { page: u32, page_size: u32 },
}

/// One page's worth of records plus the total count across all pages.
///
/// Produced once per successful fetch and immutable afterwards; a new page
/// fully replaces the previous result set, never merges into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Records of the fetched page, in API order.
    pub schools: Vec<School>,
    /// Total number of records across all pages.
    pub total: u64,
}

impl ResultSet {
    /// An empty result set.
    pub fn empty() -> Self {
        Self {
            schools: Vec::new(),
            total: 0,
        }
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.schools.len()
    }

    /// True when this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }
}

/// Wire format of `GET /api/schools`.
#[derive(Debug, Deserialize)]
pub struct SchoolsResponse {
    pub schools: Vec<School>,
    pub total: u64,
    #[allow(dead_code)]
    pub page: u32,
    #[serde(rename = "pageSize")]
    #[allow(dead_code)]
    pub page_size: u32,
}

impl From<SchoolsResponse> for ResultSet {
    fn from(response: SchoolsResponse) -> Self {
        Self {
            schools: response.schools,
            total: response.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Transport("HTTP 503 from /api/schools".to_string());
        assert!(err.to_string().contains("transport error"));
        assert!(err.to_string().contains("503"));

        let err = FetchError::Decode("expected value at line 1".to_string());
        assert!(err.to_string().contains("malformed response"));
    }

    #[test]
    fn test_response_converts_to_result_set() {
        let json = r#"{
            "schools": [
                {"id": 1, "objectid": 1, "name": "A", "latitude": 40.0, "longitude": -74.0},
                {"id": 2, "objectid": 2, "name": "B", "latitude": 41.0, "longitude": -75.0}
            ],
            "total": 250,
            "page": 1,
            "pageSize": 100
        }"#;

        let response: SchoolsResponse = serde_json::from_str(json).unwrap();
        let result: ResultSet = response.into();

        assert_eq!(result.len(), 2);
        assert_eq!(result.total, 250);
        assert_eq!(result.schools[0].name, "A");
    }

    #[test]
    fn test_empty_result_set() {
        let rs = ResultSet::empty();
        assert!(rs.is_empty());
        assert_eq!(rs.total, 0);
    }
}
