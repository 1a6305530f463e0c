//! HTTP record source.
//!
//! One blocking GET per application run. Runs on the loader thread, never
//! on the UI thread.

use crate::model::LoadError;
use std::time::Duration;

const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Fetches the record payload from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    /// Source for `url`; each request gives up after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    /// URL fetched by this source.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform the GET and return the response body.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Http` for transport failures (including timeout)
    /// and `LoadError::HttpStatus` for non-2xx responses.
    pub fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| self.transport_error(format!("http client: {e}")))?;

        let resp = client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| self.transport_error(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        resp.bytes()
            .map(|b| b.to_vec())
            .map_err(|e| self.transport_error(format!("reading body: {e}")))
    }

    fn transport_error(&self, reason: String) -> LoadError {
        LoadError::Http {
            url: self.url.clone(),
            reason,
        }
    }
}
