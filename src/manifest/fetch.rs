//! Manifest retrieval.
//!
//! Reads local manifests from disk and remote manifests over HTTP/HTTPS.
//! No retries are attempted; the caller decides what a failure means.

use reqwest::blocking::Client;
use std::fs;
use std::time::Duration;

use super::document::Manifest;
use super::source::ManifestSource;
use crate::error::{Result, UpdateError};
use crate::timer::Timer;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches and parses manifests.
pub struct ManifestFetcher {
    client: Client,
    timeout: Duration,
}

impl ManifestFetcher {
    /// Create a fetcher with the default 10-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("checkupdate/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch and parse the manifest at `source`.
    pub fn fetch(&self, source: &ManifestSource) -> Result<Manifest> {
        let location = source.to_string();
        let content = {
            let _timer = Timer::start(format!("fetch {}", location));
            self.fetch_raw(source)?
        };
        Manifest::parse(&content, &location)
    }

    /// Retrieve the manifest text without parsing it.
    pub fn fetch_raw(&self, source: &ManifestSource) -> Result<String> {
        match source {
            ManifestSource::File(path) => {
                tracing::debug!("reading manifest from {}", path.display());
                fs::read_to_string(path).map_err(|e| UpdateError::SourceUnreachable {
                    location: source.to_string(),
                    message: e.to_string(),
                })
            }
            ManifestSource::Remote(url) => self.fetch_remote(url),
        }
    }

    fn fetch_remote(&self, url: &str) -> Result<String> {
        tracing::debug!("fetching manifest from {}", url);
        let unreachable = |message: String| UpdateError::SourceUnreachable {
            location: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unreachable(format!("HTTP {}", response.status())));
        }

        response.text().map_err(|e| unreachable(e.to_string()))
    }
}
