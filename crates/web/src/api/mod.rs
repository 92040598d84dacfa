// =============================================================================
// Mobaus Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Error Types
// 3. API Client
// =============================================================================

pub mod releases;

pub use releases::{fetch_latest_release, use_latest_release, ReleaseSignals};

use gloo_net::http::{Request, RequestBuilder};
use thiserror::Error;
use web_sys::RequestCache;

// -----------------------------------------------------------------------------
// 2. Error Types
// -----------------------------------------------------------------------------

/// API error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Read(String),
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

// -----------------------------------------------------------------------------
// 3. API Client
// -----------------------------------------------------------------------------

/// HTTP client for read-only JSON APIs.
///
/// Status handling is left to the caller, which decides what a non-2xx
/// response means.
#[derive(Debug, Clone)]
pub struct ApiClient {
    accept: &'static str,
}

impl ApiClient {
    pub const GITHUB_ACCEPT: &'static str = "application/vnd.github.v3+json";

    /// Create a client that sends `accept` with every request.
    pub fn new(accept: &'static str) -> Self {
        Self { accept }
    }

    /// Client for the GitHub REST API.
    pub fn github() -> Self {
        Self::new(Self::GITHUB_ACCEPT)
    }

    /// Build a request with common headers.
    fn build_request(&self, url: &str) -> RequestBuilder {
        Request::get(url)
            .header("Accept", self.accept)
            .cache(RequestCache::Default)
    }

    /// GET request, returning the status and body without interpreting them.
    pub async fn get_raw(&self, url: &str) -> Result<RawResponse, ApiError> {
        let response = self
            .build_request(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Read(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
