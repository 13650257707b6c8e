//! HTTP client abstraction for testability

use super::types::FetchError;

/// Default request timeout in seconds.
///
/// This is a transport-layer timeout; the map core itself imposes none and
/// would otherwise stay in Loading for as long as a fetch is outstanding.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for async HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes, or a [`FetchError::Transport`] on network
    /// failure or non-2xx status.
    fn get(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with the default timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("Request failed: {}", e)))?;

        // Any non-2xx status is a fetch failure
        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| FetchError::Transport(format!("Failed to read response: {}", e)))
    }
}
