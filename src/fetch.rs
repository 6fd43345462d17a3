//! HTTP transport seam for the upstream news API.
//!
//! The client talks to the network through the [`Fetch`] trait rather than
//! calling reqwest directly. This keeps one place responsible for status
//! handling and timing logs, and lets tests substitute a canned fetcher for
//! the real transport.
//!
//! There is deliberately no retry layer here: a failed call immediately
//! surfaces so the caller can serve its empty-state fallback.

use std::time::Instant;

use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{Error, Result};

/// Async fetch of one upstream URL, returning the raw response body.
pub trait Fetch {
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// The production [`Fetch`] implementation, backed by a shared
/// [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher {
            client: reqwest::Client::new(),
        }
    }
}

impl Fetch for HttpFetcher {
    // Only the path is recorded: the query string carries the credential.
    #[instrument(level = "info", skip_all, fields(path = %url.path()))]
    async fn fetch(&self, url: &Url) -> Result<String> {
        let t0 = Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "Upstream returned non-success status"
            );
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched upstream body"
        );
        Ok(body)
    }
}
